use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tabled::{Table, Tabled};

use crate::{
    analytics::build_report, config::Config, error, info, spotify::auth::TokenGateway, success,
    types::AnalyticsReport,
};

#[derive(Tabled)]
struct MetricRow {
    metric: &'static str,
    value: String,
}

/// Builds the analytics report for `artist_id` and prints it to stdout.
pub async fn analytics(config: Config, artist_id: String, token: String) {
    let gateway = TokenGateway::new(Arc::new(config), Client::new());
    let client = gateway.wrap_token(token);

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Building analytics for {}...", artist_id));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let report = build_report(&client, &artist_id).await;
    pb.finish_and_clear();

    match report {
        Ok(report) => print_report(&report),
        Err(e) => error!("Cannot build analytics for {}. Err: {}", artist_id, e),
    }
}

fn print_report(report: &AnalyticsReport) {
    success!(
        "{} ({} followers, popularity {})",
        report.artist.name,
        report.artist.follower_count,
        report.artist.popularity
    );

    let m = &report.metrics;
    let metrics = vec![
        MetricRow {
            metric: "albums",
            value: m.total_albums.to_string(),
        },
        MetricRow {
            metric: "singles",
            value: m.total_singles.to_string(),
        },
        MetricRow {
            metric: "releases",
            value: m.total_releases.to_string(),
        },
        MetricRow {
            metric: "avg track popularity",
            value: format!("{:.1}", m.avg_track_popularity),
        },
        MetricRow {
            metric: "related artists",
            value: m.related_artists_count.to_string(),
        },
    ];
    println!("{}", Table::new(metrics));

    info!("Top tracks");
    println!("{}", Table::new(&report.top_tracks_preview));

    if report.genre_analysis.is_empty() {
        info!("No genre data available");
    } else {
        info!("Genres among related artists");
        println!("{}", Table::new(&report.genre_analysis));
    }

    if !report.related_artists_preview.is_empty() {
        info!("Related artists");
        println!("{}", Table::new(&report.related_artists_preview));
    }
}
