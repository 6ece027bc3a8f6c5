use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartScrape {
        invocation: crate::InvocationId,
        request: crate::ScrapeRequest,
    },
    CopyToClipboard {
        text: String,
    },
    ResetCopyLabelAfter {
        generation: u64,
        delay: Duration,
    },
}
