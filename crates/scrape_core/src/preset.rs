/// A named selector shortcut for a known job board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub selector: &'static str,
}

pub static PRESETS: [Preset; 4] = [
    Preset {
        label: "ジョブメドレー",
        selector: "h3 a",
    },
    Preset {
        label: "レバウェル",
        selector: "h3 span",
    },
    Preset {
        label: "ナース専科",
        selector: "h3",
    },
    Preset {
        label: "ハローワーク",
        selector: "td div h2",
    },
];

pub fn find_preset(label: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.label == label)
}
