//! Human-readable rendering for the dashboard commands.
//!
//! `list` renders either a card grid or map markers over the same
//! filtered set; `show` renders one report in full.

use ct_client::ReportBoard;
use ct_core::{IncidentReport, Position, StatusFilter};

pub(crate) fn grid(board: &ReportBoard) {
    let filtered = board.filtered();

    for report in &filtered {
        card(report);
        println!();
    }

    summary(board, filtered.len());
}

/// One line per marker: status color, coordinates, title.
pub(crate) fn map(board: &ReportBoard) {
    for marker in board.markers() {
        println!(
            "{} {} {} [{}]",
            marker.color,
            marker.position,
            marker.report.title,
            marker.report.status.label()
        );
    }

    summary(board, board.markers().len());
}

pub(crate) fn detail(report: &IncidentReport) {
    card(report);
    println!();
    println!("{}", report.description);
}

fn card(report: &IncidentReport) {
    println!("{} [{}]", report.title, report.status.label());
    println!("  id:       {}", report.id);
    println!("  category: {}", report.category.label());
    println!(
        "  location: {}",
        Position::new(report.latitude, report.longitude)
    );
    println!(
        "  created:  {}",
        report.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    if let Some(ref url) = report.photo_url {
        println!("  photo:    {}", url);
    }
}

fn summary(board: &ReportBoard, shown: usize) {
    let counts = board
        .status_counts()
        .map(|(status, count)| format!("{}: {}", status.label(), count))
        .join(", ");

    match board.filter {
        StatusFilter::All => println!("{} report(s). {}", shown, counts),
        filter => println!(
            "{} of {} report(s) shown (filter: {}). {}",
            shown,
            board.reports().len(),
            filter,
            counts
        ),
    }
}
