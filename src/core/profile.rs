use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: Option<String>,
    pub plan: Option<String>,
    pub enrichments_used: u64,
    pub enrichment_limit: u64,
    pub enrichments_remaining: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Starter,
    Pro,
    Unlimited,
    Free,
    Other(String),
}

impl Plan {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "free" => Plan::Free,
            "starter" => Plan::Starter,
            "pro" => Plan::Pro,
            "unlimited" => Plan::Unlimited,
            other => Plan::Other(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Plan::Starter => "starter",
            Plan::Pro => "pro",
            Plan::Unlimited => "unlimited",
            Plan::Free => "free",
            Plan::Other(id) => id,
        }
    }
}

/// Colour band of the quota bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Normal,
    Warning,
    Exhausted,
}

impl UsageLevel {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 100.0 {
            UsageLevel::Exhausted
        } else if percent >= 70.0 {
            UsageLevel::Warning
        } else {
            UsageLevel::Normal
        }
    }
}

impl Profile {
    pub fn plan(&self) -> Plan {
        Plan::from_name(self.plan.as_deref().unwrap_or_default())
    }

    /// Plan name for display, "Free" when the account has none.
    pub fn plan_label(&self) -> String {
        match self.plan.as_deref().map(str::trim) {
            Some(plan) if !plan.is_empty() => capitalize_words(plan),
            _ => "Free".to_string(),
        }
    }

    /// Unclamped share of the quota consumed. A zero limit yields 0 when
    /// nothing was used and an unbounded value otherwise.
    pub fn usage_percent(&self) -> f64 {
        if self.enrichment_limit == 0 {
            return if self.enrichments_used == 0 {
                0.0
            } else {
                f64::INFINITY
            };
        }
        self.enrichments_used as f64 / self.enrichment_limit as f64 * 100.0
    }

    /// Visual width of the quota bar, always within `[0, 100]`.
    pub fn bar_percent(&self) -> f32 {
        self.usage_percent().clamp(0.0, 100.0) as f32
    }

    pub fn usage_level(&self) -> UsageLevel {
        UsageLevel::from_percent(self.usage_percent())
    }
}

fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(used: u64, limit: u64) -> Profile {
        Profile {
            enrichments_used: used,
            enrichment_limit: limit,
            enrichments_remaining: limit as i64 - used as i64,
            ..Default::default()
        }
    }

    #[test]
    fn test_bar_percent_is_proportional() {
        assert_eq!(profile(25, 100).bar_percent(), 25.0);
        assert_eq!(profile(0, 100).bar_percent(), 0.0);
    }

    #[test]
    fn test_bar_percent_clamps_overuse() {
        let p = profile(150, 100);
        assert_eq!(p.usage_percent(), 150.0);
        assert_eq!(p.bar_percent(), 100.0);
    }

    #[test]
    fn test_zero_limit_does_not_divide() {
        assert_eq!(profile(0, 0).bar_percent(), 0.0);
        assert_eq!(profile(3, 0).bar_percent(), 100.0);
        assert_eq!(profile(3, 0).usage_level(), UsageLevel::Exhausted);
    }

    #[test]
    fn test_usage_level_thresholds() {
        assert_eq!(profile(69, 100).usage_level(), UsageLevel::Normal);
        assert_eq!(profile(70, 100).usage_level(), UsageLevel::Warning);
        assert_eq!(profile(100, 100).usage_level(), UsageLevel::Exhausted);
    }

    #[test]
    fn test_plan_label_defaults_to_free() {
        assert_eq!(Profile::default().plan_label(), "Free");
        let p = Profile {
            plan: Some("pro".into()),
            ..Default::default()
        };
        assert_eq!(p.plan_label(), "Pro");
        assert_eq!(p.plan(), Plan::Pro);
    }

    #[test]
    fn test_unknown_plan_is_preserved() {
        assert_eq!(
            Plan::from_name("Enterprise"),
            Plan::Other("enterprise".into())
        );
        assert_eq!(Plan::from_name(""), Plan::Free);
    }

    #[test]
    fn test_profile_deserializes_with_missing_fields() {
        let p: Profile = serde_json::from_str(
            r#"{"plan":"starter","enrichments_used":4,"enrichment_limit":100,"enrichments_remaining":96}"#,
        )
        .unwrap();
        assert_eq!(p.name, None);
        assert_eq!(p.plan(), Plan::Starter);
        assert_eq!(p.enrichments_remaining, 96);
    }
}
