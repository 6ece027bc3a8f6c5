use std::fmt::Write;

use scrape_core::{AppViewModel, ResultView, NO_MATCHES_MESSAGE, PRESETS};

pub const HELP: &str = "\
commands:
  url <address>        set the page to scrape
  selector <css>       set the CSS selector (locked while a preset is active)
  relay on|off         fetch through the CORS relay
  preset <n|label>     toggle a selector preset
  presets              list presets
  scrape               run the scrape
  copy                 copy the results, one per line
  clear                reset the form and results
  show                 redraw the form
  help                 this text
  quit                 exit";

/// Plain-text rendering of the whole screen.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "URL:      {}", or_placeholder(&view.url));
    let _ = writeln!(
        out,
        "Relay:    {}",
        if view.use_relay { "on" } else { "off" }
    );
    let _ = write!(out, "Selector: {}", or_placeholder(&view.selector));
    if let Some(label) = view.selected_preset {
        let _ = write!(out, "  [preset: {label}]");
    }
    out.push('\n');

    if view.loading {
        out.push_str("Scraping...\n");
    }

    if let Some(error) = &view.error {
        out.push_str("\nError:\n");
        for line in error.lines() {
            let _ = writeln!(out, "  {line}");
        }
    }

    match &view.result {
        None => {}
        Some(ResultView::NoMatches) => {
            let _ = writeln!(out, "\nResult:\n  {NO_MATCHES_MESSAGE}");
        }
        Some(ResultView::Rows(rows)) => {
            out.push_str("\nResult:\n");
            out.push_str(&render_table(rows));
            if let Some(label) = view.copy_label {
                let _ = writeln!(out, "[{}] {} row(s)", label.text(), rows.len());
            }
        }
    }
    out
}

pub fn render_presets(selected: Option<&str>) -> String {
    let mut out = String::new();
    for (index, preset) in PRESETS.iter().enumerate() {
        let marker = if selected == Some(preset.label) { "*" } else { " " };
        let _ = writeln!(
            out,
            "{marker} {}. {}  ({})",
            index + 1,
            preset.label,
            preset.selector
        );
    }
    out
}

fn render_table(rows: &[String]) -> String {
    let width = rows.len().to_string().len().max(1);
    let mut out = String::new();
    let _ = writeln!(out, "  {:>width$} | Extracted text", "#");
    for (index, row) in rows.iter().enumerate() {
        let mut lines = row.lines();
        let first = lines.next().unwrap_or_default();
        let _ = writeln!(out, "  {:>width$} | {first}", index + 1);
        for line in lines {
            let _ = writeln!(out, "  {:>width$} | {line}", "");
        }
    }
    out
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        "(empty)"
    } else {
        value
    }
}
