//! Console projection of the view model: exactly one of the three views is
//! printed per snapshot.

use std::io::{self, Write};

use launchpad_core::{AppViewModel, Phase, ViewMode, DOCS_URL};

/// One-time application banner.
pub fn banner() {
    println!("Launchpad");
    println!("Launch your miniapp across Farcaster, World, Celo, and more.");
    println!();
}

pub fn render(view: &AppViewModel) {
    match view.mode {
        ViewMode::EntryForm => render_form(view),
        ViewMode::ProgressNarration => println!("{}", view.progress_message),
        ViewMode::SuccessInstructions => render_success(view),
    }
}

fn render_form(view: &AppViewModel) {
    if view.phase == Phase::Failed {
        println!("{}", view.progress_message);
        println!();
    }
    println!("Describe your miniapp idea (e.g. a simple counter), then press Enter:");
    print!("> ");
    let _ = io::stdout().flush();
}

fn render_success(view: &AppViewModel) {
    let url = view.result_url.as_deref().unwrap_or_default();
    println!();
    println!("Your miniapp is ready! To preview it:");
    println!("  1. Open the developer tools page: {DOCS_URL}");
    println!("  2. Find the \"Preview Mini App\" tool.");
    println!("  3. Enter this URL: {url}");
    println!("  4. Click \"Preview\" (the first load can take a few seconds).");
}
