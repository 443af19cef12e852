//! Infographic data model and the pure presentation helpers derived from it.
//!
//! Everything here is plain data + functions so the render layer and the
//! generation client share one vocabulary and all of it is unit-testable.

use serde::{Deserialize, Serialize};

/// A single career tied to the current physics topic.
///
/// The wire form is camelCase JSON produced by the model under a declared
/// response schema. `id` is optional on the wire; display keys fall back to
/// array position, which is stable because careers are never reordered
/// after a fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    /// Estimated average annual salary in INR.
    pub salary: f64,
    /// Projected 10-year job growth, in percent.
    pub growth: f64,
    pub degree_level: String,
    /// One actionable sentence linking the career to classroom teaching.
    pub classroom_activity: String,
    pub skills: Vec<String>,
}

/// One generated infographic: a topic, a one-sentence summary, and the
/// careers to display. Replaced wholesale on every successful fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InfographicData {
    pub topic: String,
    pub summary: String,
    pub careers: Vec<Career>,
}

impl InfographicData {
    /// Post-decode shape check. serde already guarantees field presence and
    /// types; this catches decoded-but-useless payloads before they reach
    /// rendering.
    pub fn shape_error(&self) -> Option<String> {
        if self.topic.trim().is_empty() {
            return Some("topic is blank".into());
        }
        if self.summary.trim().is_empty() {
            return Some("summary is blank".into());
        }
        if self.careers.is_empty() {
            return Some("careers array is empty".into());
        }
        for (i, career) in self.careers.iter().enumerate() {
            if career.title.trim().is_empty() {
                return Some(format!("career {} has a blank title", i));
            }
        }
        None
    }
}

/// Maximum number of tags in the skill-intersection list.
pub const SKILL_TAG_CAP: usize = 10;

/// Union of all careers' skills in first-seen order, deduplicated and
/// capped at [`SKILL_TAG_CAP`]. Dedup compares the raw skill strings.
pub fn skill_intersection(careers: &[Career]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for career in careers {
        for skill in &career.skills {
            if seen.len() >= SKILL_TAG_CAP {
                return seen;
            }
            if !seen.iter().any(|s| s == skill) {
                seen.push(skill.clone());
            }
        }
    }
    seen
}

/// Render a skill as a tag: `#`-prefixed with all internal whitespace
/// removed ("Data Analysis" → "#DataAnalysis").
pub fn hashtag(skill: &str) -> String {
    let compact: String = skill.split_whitespace().collect();
    format!("#{}", compact)
}

/// Format an INR amount with Indian digit grouping: the last three digits,
/// then groups of two (1_50_00_000 → "1,50,00,000"). Rounds to whole
/// rupees; callers prepend the `₹` symbol.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let mut n = rounded.abs() as u64;

    let tail = n % 1000;
    n /= 1000;
    let mut out = if n == 0 {
        tail.to_string()
    } else {
        format!("{:03}", tail)
    };
    while n > 0 {
        let head = n % 100;
        n /= 100;
        if n == 0 {
            out = format!("{},{}", head, out);
        } else {
            out = format!("{:02},{}", head, out);
        }
    }

    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

/// Format a growth percentage the way the cards show it: "+12%", "+7.5%".
pub fn format_growth(growth: f64) -> String {
    format!("+{}%", growth)
}

/// First whitespace-separated word of a title, used as the chart axis
/// label ("Electrical Engineer" → "Electrical").
pub fn first_word(title: &str) -> &str {
    title.split_whitespace().next().unwrap_or(title)
}

#[cfg(test)]
pub fn sample_career(title: &str, salary: f64, skills: &[&str]) -> Career {
    Career {
        id: None,
        title: title.to_string(),
        description: format!("{} works with physics every day.", title),
        salary,
        growth: 12.0,
        degree_level: "Bachelors".to_string(),
        classroom_activity: format!("Demonstrate how a {} applies the topic.", title),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
pub fn sample_data(topic: &str) -> InfographicData {
    InfographicData {
        topic: topic.to_string(),
        summary: format!("{} underpins much of modern engineering.", topic),
        careers: vec![
            sample_career("Electrical Engineer", 1_200_000.0, &["Math", "Circuits", "CAD"]),
            sample_career("MRI Technologist", 650_000.0, &["Anatomy", "Math", "Safety"]),
            sample_career("RF Engineer", 1_500_000.0, &["Antennas", "Math", "DSP"]),
            sample_career("Power Systems Analyst", 900_000.0, &["Grids", "CAD", "Simulation"]),
        ],
    }
}
