// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the cyclist scatterplot from the published dataset into `peloton_demo.html`.
//!
//! The tooltip is shown for the fastest rider so the written page demonstrates it.

mod markup;

use peloton_view::{LoadOutcome, ScatterplotView, ViewConfig};

const OUTPUT: &str = "peloton_demo.html";

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = ViewConfig::default();
    let source = config.http_source();
    let title = config.title.clone();
    let mut view = match ScatterplotView::mount(config) {
        Ok(view) => view,
        Err(e) => {
            log::error!("failed to mount scatterplot: {e}");
            std::process::exit(1);
        }
    };

    match view.load(&source).await {
        LoadOutcome::Rendered { points } => log::info!("rendered {points} riders"),
        other => log::warn!("chart left empty: {other:?}"),
    }

    hover_fastest(&mut view);

    let html = markup::render_document(&title, view.surface());
    if let Err(e) = std::fs::write(OUTPUT, html) {
        log::error!("failed to write {OUTPUT}: {e}");
        std::process::exit(1);
    }
    println!("wrote {OUTPUT}");
}

/// Moves the pointer onto the fastest rider's point.
fn hover_fastest(view: &mut ScatterplotView) {
    let fastest = view
        .records()
        .iter()
        .enumerate()
        .filter_map(|(i, r)| Some((i, r.seconds()?)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i);
    let Some(anchor) = fastest
        .and_then(|i| view.mark_for_record(i))
        .and_then(|mark| view.mark_anchor(mark))
    else {
        return;
    };
    match view.pointer_moved(anchor) {
        Ok(Some(_)) => {
            let record = fastest.and_then(|i| view.records().get(i));
            if let Some(r) = record {
                log::info!(
                    "hovering {} ({:?}, {:?})",
                    r.record.name,
                    r.record.year,
                    r.display_time()
                );
            }
        }
        Ok(None) => log::debug!("no point under {anchor:?}"),
        Err(e) => log::error!("hover failed: {e}"),
    }
}
