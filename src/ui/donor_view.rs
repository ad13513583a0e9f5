use chrono::{DateTime, Utc};

use super::{format_currency, truncate_to_width};
use crate::donors::{Donor, DonorStats};

pub fn format_donor_stats(stats: &DonorStats) -> String {
    format!(
        "{} donors | {} raised | {} average gift | {} recent | {} active",
        stats.total_donors,
        format_currency(stats.total_raised),
        format_currency(stats.average_gift),
        stats.recent_donors,
        stats.active_donors
    )
}

fn donor_line(donor: &Donor, now: DateTime<Utc>) -> String {
    let last_gift = match (donor.last_gift_date, donor.last_gift_amount) {
        (Some(date), Some(amount)) => format!("{} on {}", format_currency(amount), date.format("%Y-%m-%d")),
        (Some(date), None) => date.format("%Y-%m-%d").to_string(),
        _ => "no gifts yet".to_string(),
    };
    let recent = if donor.is_recent(now) { " *" } else { "" };
    let line = format!(
        "{:>3}  {:<26} {:<24} {:>10}  last {}{}",
        donor.id,
        donor.name,
        donor.organization.as_deref().unwrap_or("-"),
        format_currency(donor.total_given),
        last_gift,
        recent
    );
    truncate_to_width(&line, 120)
}

pub fn format_directory(donors: &[Donor], stats: &DonorStats, now: DateTime<Utc>) -> String {
    let mut lines = vec!["Donor Network".to_string(), format_donor_stats(stats), String::new()];
    if donors.is_empty() {
        lines.push("No donors found.".to_string());
    }
    for donor in donors {
        lines.push(donor_line(donor, now));
    }
    lines.join("\n")
}

/// Contact details, narrative notes and interaction history for one donor.
pub fn format_donor_detail(donor: &Donor) -> String {
    let mut lines = vec![donor.name.clone()];
    if let Some(org) = &donor.organization {
        lines.push(org.clone());
    }
    for (label, value) in [("Email", &donor.email), ("Phone", &donor.phone)] {
        if let Some(value) = value {
            lines.push(format!("{}: {}", label, value));
        }
    }
    lines.push(format!("Total given: {}", format_currency(donor.total_given)));

    for (label, value) in [("Notes", &donor.notes), ("Plans", &donor.plans), ("Thoughts", &donor.thoughts)] {
        if let Some(value) = value {
            lines.push(String::new());
            lines.push(format!("{}:", label));
            lines.push(format!("  {}", value));
        }
    }

    lines.push(String::new());
    lines.push("Interactions:".to_string());
    if donor.interactions.is_empty() {
        lines.push("  none".to_string());
    }
    for interaction in &donor.interactions {
        lines.push(format!(
            "  {} {:<8} {}",
            interaction.date.format("%Y-%m-%d"),
            interaction.kind.label(),
            interaction.summary
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::utc_day;
    use crate::donors::DonorDirectory;

    #[test]
    fn directory_marks_recent_donors() {
        let directory = DonorDirectory::default();
        let now = utc_day(2024, 2, 1);
        let donors = directory.search("sarah");

        let text = format_directory(&donors, &directory.stats(now), now);

        assert!(text.contains("20 donors | $2,601,000 raised | $130,050 average gift"));
        assert!(text.contains("Sarah Johnson"));
        assert!(text.contains("last $25,000 on 2024-01-15 *"));
    }

    #[test]
    fn detail_lists_interactions_in_order() {
        let donor = DonorDirectory::default().find("1").unwrap();

        let text = format_donor_detail(&donor);

        assert!(text.starts_with("Sarah Johnson\nJohnson & Associates"));
        assert!(text.contains("  2024-01-15 donation Donated $25,000 for spring program expansion"));
        assert!(text.ends_with("  2023-12-05 meeting  Annual donor appreciation dinner - brought her daughter"));
    }
}
