#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

mod app;
mod config;
mod domain;
mod infra;
mod logging;
mod platform;
mod ui;
mod usecase;


fn main() {
    logging::init();

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");
    log::debug!("webview data dir: {}", webview_data_dir.display());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title(config::WINDOW_TITLE),
                )
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "mailsift")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
