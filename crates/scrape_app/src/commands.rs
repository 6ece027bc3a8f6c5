use scrape_core::{Msg, PRESETS};
use thiserror::Error;

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Update(Msg),
    Presets,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help` for a list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("no preset {0:?}; type `presets` for a list")]
    UnknownPreset(String),
}

/// Parses a prompt line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (line, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "url" | "u" => Command::Update(Msg::UrlChanged(arg.to_string())),
        "selector" | "sel" | "s" => Command::Update(Msg::SelectorChanged(arg.to_string())),
        "relay" => Command::Update(Msg::RelayToggled(parse_switch(arg)?)),
        "preset" | "p" => Command::Update(Msg::PresetClicked(resolve_preset(arg)?.to_string())),
        "presets" => Command::Presets,
        "scrape" | "run" => Command::Update(Msg::ScrapeClicked),
        "copy" => Command::Update(Msg::CopyClicked),
        "clear" => Command::Update(Msg::ClearClicked),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(name.to_string())),
    };
    Ok(Some(command))
}

/// Accepts a preset label or its 1-based position in the list.
pub fn resolve_preset(arg: &str) -> Result<&'static str, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::Usage("preset <n|label>"));
    }
    if let Ok(index) = arg.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| PRESETS.get(i))
            .map(|preset| preset.label)
            .ok_or_else(|| CommandError::UnknownPreset(arg.to_string()));
    }
    scrape_core::find_preset(arg)
        .map(|preset| preset.label)
        .ok_or_else(|| CommandError::UnknownPreset(arg.to_string()))
}

fn parse_switch(arg: &str) -> Result<bool, CommandError> {
    match arg.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(CommandError::Usage("relay on|off")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn form_commands_map_to_messages() {
        assert_eq!(
            parse("url https://example.com/jobs?q=a b").unwrap(),
            Some(Command::Update(Msg::UrlChanged(
                "https://example.com/jobs?q=a b".into()
            )))
        );
        assert_eq!(
            parse("  selector   h3 a  ").unwrap(),
            Some(Command::Update(Msg::SelectorChanged("h3 a".into())))
        );
        assert_eq!(
            parse("relay OFF").unwrap(),
            Some(Command::Update(Msg::RelayToggled(false)))
        );
        assert_eq!(
            parse("scrape").unwrap(),
            Some(Command::Update(Msg::ScrapeClicked))
        );
    }

    #[test]
    fn bare_selector_clears_the_field() {
        assert_eq!(
            parse("selector").unwrap(),
            Some(Command::Update(Msg::SelectorChanged(String::new())))
        );
    }

    #[test]
    fn presets_resolve_by_index_or_label() {
        assert_eq!(resolve_preset("1").unwrap(), PRESETS[0].label);
        assert_eq!(resolve_preset("ハローワーク").unwrap(), "ハローワーク");
        assert_eq!(
            resolve_preset("0"),
            Err(CommandError::UnknownPreset("0".into()))
        );
        assert_eq!(
            resolve_preset("5"),
            Err(CommandError::UnknownPreset("5".into()))
        );
        assert!(matches!(resolve_preset(""), Err(CommandError::Usage(_))));
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(
            parse("fetch now"),
            Err(CommandError::Unknown("fetch".into()))
        );
        assert!(matches!(parse("relay maybe"), Err(CommandError::Usage(_))));
    }
}
