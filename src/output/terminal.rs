// Colored terminal output for analysis reports and keyword rankings.

use std::path::Path;

use colored::Colorize;

use crate::analysis::TermWeight;
use crate::pipeline::AnalysisReport;
use crate::scoring::MatchTier;

/// Display a full analysis report.
///
/// Shows at most `display_limit` missing keywords unless `show_all` is set.
pub fn display_report(report: &AnalysisReport, display_limit: usize, show_all: bool) {
    println!("\n{}", "=== Analysis Results ===".bold());
    println!();

    println!("  {}", colorize_tier(report.tier));
    println!(
        "  Similarity score: {}",
        format!("{:.1}%", report.similarity * 100.0).bold()
    );
    println!("  Missing keywords: {}+", report.missing_keywords.len());
    println!(
        "  {}",
        format!(
            "Compared {} resume words against {} job description words",
            report.resume_word_count, report.job_description_word_count
        )
        .dimmed()
    );

    if !report.missing_keywords.is_empty() {
        println!("\n{}", "Missing Keywords".bold());
        println!("  Consider incorporating these keywords from the job description:");

        let shown = if show_all {
            report.missing_keywords.len()
        } else {
            display_limit.min(report.missing_keywords.len())
        };
        println!("  {}", report.missing_keywords[..shown].join(" • ").cyan());

        let hidden = report.missing_keywords.len() - shown;
        if hidden > 0 {
            println!(
                "  {}",
                format!("...and {hidden} more (use --all to show every keyword)").dimmed()
            );
        }
    }

    println!("\n{}", "Recommendations".bold());
    for (i, rec) in report.recommendations.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, rec);
    }
    println!();
}

/// Display the salience ranking of a job description's terms.
pub fn display_ranked_terms(terms: &[TermWeight]) {
    if terms.is_empty() {
        println!("No keywords found. Is the job description mostly stop words?");
        return;
    }

    println!(
        "\n{}",
        format!("=== Job Description Keywords ({} terms) ===", terms.len()).bold()
    );
    println!();

    let bar_width: usize = 20;
    let top = terms[0].weight.max(f64::EPSILON);

    for (i, tw) in terms.iter().enumerate() {
        let filled = ((tw.weight / top) * bar_width as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled),
            " ".repeat(bar_width.saturating_sub(filled))
        );
        println!(
            "  {:>3}. {:<32} {} {:.3}",
            i + 1,
            tw.term.bold(),
            bar.bright_blue(),
            tw.weight
        );
    }
    println!();
}

/// Show (a preview of) the text extracted from the resume.
pub fn display_resume_text(text: &str, max_chars: usize) {
    println!("{}", "=== Extracted Resume Text ===".bold());
    println!("{}", super::truncate_chars(text, max_chars).dimmed());
    println!();
}

/// Visible notice for a resume whose text could not be extracted.
pub fn display_extraction_error(path: &Path) {
    eprintln!(
        "{} Could not extract text from {}",
        "Error:".red().bold(),
        path.display()
    );
    eprintln!(
        "  {}",
        "Make sure the PDF is text-based (not a scanned image) and not corrupted.".dimmed()
    );
}

/// Colorize a match tier label.
fn colorize_tier(tier: MatchTier) -> colored::ColoredString {
    match tier {
        MatchTier::Excellent => tier.as_str().green().bold(),
        MatchTier::Good => tier.as_str().yellow().bold(),
        MatchTier::NeedsImprovement => tier.as_str().red().bold(),
    }
}
