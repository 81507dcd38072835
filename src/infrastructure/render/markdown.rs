//! Markdown rendering of an analysis.

use std::fmt::Write;

use crate::domain::entities::report::{Analysis, Report};
use crate::domain::ports::renderer::ReportRenderer;

pub struct MarkdownRenderer;

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, analysis: &Analysis) -> String {
        let mut out = String::new();
        match analysis {
            Analysis::Consolidated { report } => {
                out.push_str("## Consolidated Nifty Sentiment (Spot & Futures Aligned)\n\n");
                render_report(&mut out, report);
            }
            Analysis::Diverged { spot, futures } => {
                out.push_str("## Nifty Spot Sentiment Analysis\n\n");
                render_report(&mut out, spot);
                out.push_str("## Nifty Futures Sentiment Analysis\n\n");
                render_report(&mut out, futures);
            }
        }
        out
    }
}

fn render_report(out: &mut String, report: &Report) {
    // Writing to a String cannot fail; discard the fmt::Result.
    let _ = writeln!(out, "### {} → **{}** ", report.opening, report.sentiment);
    let _ = writeln!(
        out,
        "Composite Sentiment Score: **{:+}** (details below).  \n",
        report.score
    );

    out.push_str("**Probability Matrix (Indicative)** \n");
    let probs = &report.probabilities;
    let _ = writeln!(out, "- 🔼 Upside Bias: **{}%** ", probs.up);
    let _ = writeln!(out, "- ➡️ Sideways/Neutral: **{}%** ", probs.side);
    let _ = writeln!(out, "- 🔽 Downside Bias: **{}%** \n", probs.down);

    let alternates = probs
        .alternates()
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" or ");
    let _ = writeln!(
        out,
        "**Primary Path Outlook:** *{} bias*. Expect price action broadly consistent with {} signals.  ",
        probs.primary(),
        report.sentiment.to_string().to_lowercase()
    );
    let _ = writeln!(
        out,
        "**Alternate Path Consideration:** If early market dynamics contradict the primary path, observe for a potential shift towards the *{alternates}* scenario(s).  \n"
    );

    out.push_str("**Contributing Factors Score:** \n");
    for factor in &report.factors {
        let _ = writeln!(out, "- {}: {:+}  ", factor.name, factor.points);
    }

    out.push_str("\n**Special Conditions Noted:**\n");
    let c = &report.conditions;
    if c.high_reward_dii_vix {
        out.push_str("✅ *High-Reward Potential*: Significant DII buying when India VIX is elevated can indicate domestic conviction amidst fear, potentially leading to amplified intraday swings if sentiment turns positive.\n");
    }
    if c.bear_trap_fii_pcr {
        out.push_str("⚠️ *Bear-Trap Risk*: Notable FII selling combined with a very low Nifty PCR might signal overdone pessimism or retail shorting; susceptible to sharp short-covering rallies.\n");
    }
    if c.oversold_bounce_risk {
        out.push_str("🔄 *Oversold Bounce Risk?*: A very high Nifty PCR coupled with an elevated India VIX can suggest extreme pessimism, potentially setting the stage for a technical rebound or short covering.\n");
    }
    if !c.any() {
        out.push_str("None of the predefined special conditions met.\n");
    }

    out.push_str("\n---\n\n");
}
