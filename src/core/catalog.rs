use super::profile::Plan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOffer {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub credits: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub popular: bool,
}

impl PlanOffer {
    pub fn is_current(&self, plan: &Plan) -> bool {
        self.id == plan.id()
    }
}

pub static PLANS: [PlanOffer; 3] = [
    PlanOffer {
        id: "starter",
        name: "Starter",
        price: "$9",
        credits: "100",
        label: "People",
        description: "Entry level access",
        popular: false,
    },
    PlanOffer {
        id: "pro",
        name: "Pro",
        price: "$19",
        credits: "400\u{2013}500",
        label: "People",
        description: "Best value for most",
        popular: true,
    },
    PlanOffer {
        id: "unlimited",
        name: "Unlimited",
        price: "$39",
        credits: "Unlimited",
        label: "People",
        description: "For high volume needs",
        popular: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integration {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub available: bool,
}

pub static INTEGRATIONS: [Integration; 4] = [
    Integration {
        id: "notion",
        name: "Notion",
        icon: "\u{1f4dd}",
        description: "Sync enriched profiles directly to your Notion databases.",
        available: true,
    },
    Integration {
        id: "slack",
        name: "Slack",
        icon: "\u{1f4ac}",
        description: "Get real-time enrichment notifications in your Slack channels.",
        available: false,
    },
    Integration {
        id: "zapier",
        name: "Zapier",
        icon: "\u{26a1}",
        description: "Connect to 5,000+ apps with Zapier automations.",
        available: false,
    },
    Integration {
        id: "webhook",
        name: "Webhook API",
        icon: "\u{1f517}",
        description: "Send enriched data to any URL via custom webhooks.",
        available: false,
    },
];

pub fn find_plan(id: &str) -> Option<&'static PlanOffer> {
    PLANS.iter().find(|p| p.id == id)
}

pub fn find_integration(id: &str) -> Option<&'static Integration> {
    INTEGRATIONS.iter().find(|i| i.id == id)
}

/// Outcome of an action whose backend does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotYetAvailable {
    pub message: String,
}

pub fn request_upgrade(plan: &PlanOffer) -> NotYetAvailable {
    NotYetAvailable {
        message: format!(
            "Payment integration coming soon! You selected the {} plan for {}.",
            plan.name, plan.price
        ),
    }
}

/// `None` when the integration cannot be connected at all.
pub fn request_connect(integration: &Integration) -> Option<NotYetAvailable> {
    integration.available.then(|| NotYetAvailable {
        message: format!(
            "{name} integration coming soon! This will open the {name} OAuth flow.",
            name = integration.name
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_is_a_placeholder_notice() {
        let pro = find_plan("pro").unwrap();
        assert_eq!(
            request_upgrade(pro).message,
            "Payment integration coming soon! You selected the Pro plan for $19."
        );
    }

    #[test]
    fn test_only_available_integrations_connect() {
        let notion = find_integration("notion").unwrap();
        assert!(
            request_connect(notion)
                .unwrap()
                .message
                .starts_with("Notion integration coming soon!")
        );
        assert_eq!(request_connect(find_integration("slack").unwrap()), None);
    }

    #[test]
    fn test_current_plan_matches_offer() {
        let starter = find_plan("starter").unwrap();
        assert!(starter.is_current(&Plan::Starter));
        assert!(!starter.is_current(&Plan::Free));
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
    }
}
