use iced::{
    Alignment, Element, Length,
    widget::{Row, button, column, container, row, scrollable, text},
};

use super::{loading_screen, notice_banner, page, page_header, plan_usage};
use crate::{
    app::message::{BillingMessage, Message},
    core::{
        api::ApiError,
        catalog::{self, PLANS, PlanOffer},
        profile::{Plan, Profile},
    },
    styles::{self, font_size, spacing},
};

#[derive(Debug, Default)]
pub struct BillingState {
    pub profile: Profile,
    pub loading: bool,
    pub notice: Option<String>,
    issued: u64,
}

impl BillingState {
    /// Marks a profile load as in flight and returns its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.issued += 1;
        self.loading = true;
        self.issued
    }

    /// Applies a profile response. Returns `false` for superseded responses.
    pub fn finish_load(&mut self, seq: u64, result: Result<Profile, ApiError>) -> bool {
        if seq != self.issued {
            log::debug!("Dropping stale billing response #{seq}");
            return false;
        }
        self.loading = false;
        match result {
            Ok(profile) => self.profile = profile,
            Err(e) => log::error!("Failed to load billing profile: {e}"),
        }
        true
    }

    /// Invalidates any in-flight load.
    pub fn leave(&mut self) {
        self.issued += 1;
        self.loading = false;
        self.notice = None;
    }

    pub fn upgrade(&mut self, plan_id: &str) {
        match catalog::find_plan(plan_id) {
            Some(plan) => self.notice = Some(catalog::request_upgrade(plan).message),
            None => log::warn!("Unknown plan: {plan_id}"),
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

fn plan_card<'a>(offer: &'static PlanOffer, current: &Plan) -> Element<'a, Message> {
    let is_current = offer.is_current(current);

    let mut body = column![].spacing(spacing::MD).align_x(Alignment::Center);
    if offer.popular {
        body = body.push(
            container(text("Most Popular").size(font_size::BADGE))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::badge_primary),
        );
    }
    body = body
        .push(text(offer.name).size(font_size::HEADING))
        .push(
            text(offer.description)
                .size(font_size::SMALL)
                .style(styles::muted_text),
        )
        .push(
            row![
                text(offer.price).size(font_size::DISPLAY),
                text("/mo").size(font_size::SMALL).style(styles::muted_text),
            ]
            .spacing(spacing::XXS)
            .align_y(Alignment::End),
        )
        .push(
            column![
                text(offer.credits)
                    .size(font_size::TITLE)
                    .style(styles::accent_text),
                text(offer.label)
                    .size(font_size::CAPTION)
                    .style(styles::muted_text),
            ]
            .align_x(Alignment::Center),
        );

    let action = if is_current {
        button(text("Current Plan").size(font_size::SMALL).center())
            .width(Length::Fill)
            .padding([spacing::SM, spacing::LG])
            .style(styles::outlined_button)
    } else {
        button(
            text(format!("Upgrade to {}", offer.name))
                .size(font_size::SMALL)
                .center(),
        )
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(button::primary)
        .on_press(Message::Billing(BillingMessage::Upgrade(offer.id)))
    };
    body = body.push(action);

    let card = container(body)
        .padding(spacing::XXL)
        .width(Length::FillPortion(1))
        .height(Length::Shrink);

    if offer.popular {
        card.style(styles::highlighted_card).into()
    } else {
        card.style(styles::card).into()
    }
}

pub fn view(state: &BillingState) -> Element<'_, Message> {
    if state.loading {
        return loading_screen("Loading billing...");
    }

    let mut content = column![page_header(
        "Billing \u{1f4b3}".to_string(),
        "Manage your plan and usage",
    )]
    .spacing(spacing::XXL);

    if let Some(notice) = &state.notice {
        content = content.push(notice_banner(
            notice,
            Message::Billing(BillingMessage::DismissNotice),
        ));
    }

    let current = state.profile.plan();
    let plans = PLANS
        .iter()
        .fold(Row::new().spacing(spacing::XL), |grid, offer| {
            grid.push(plan_card(offer, &current))
        });

    content = content
        .push(
            container(plan_usage::view(&state.profile, Some("Current Plan")))
                .width(Length::Fill)
                .style(styles::card),
        )
        .push(text("Available Plans").size(font_size::HEADING))
        .push(plans);

    page(scrollable(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::Endpoint;

    fn profile(plan: &str) -> Profile {
        Profile {
            plan: Some(plan.into()),
            enrichments_used: 40,
            enrichment_limit: 100,
            enrichments_remaining: 60,
            ..Default::default()
        }
    }

    #[test]
    fn test_stale_profile_is_dropped() {
        let mut state = BillingState::default();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(!state.finish_load(first, Ok(profile("starter"))));
        assert!(state.loading);

        assert!(state.finish_load(second, Ok(profile("pro"))));
        assert!(!state.loading);
        assert_eq!(state.profile.plan(), Plan::Pro);
    }

    #[test]
    fn test_failed_load_keeps_free_defaults() {
        let mut state = BillingState::default();
        let seq = state.begin_load();
        let err = ApiError::Status {
            endpoint: Endpoint::Profile,
            status: 500,
        };

        assert!(state.finish_load(seq, Err(err)));
        assert_eq!(state.profile.plan_label(), "Free");
        assert_eq!(state.profile.enrichment_limit, 0);
    }

    #[test]
    fn test_leaving_invalidates_inflight_load() {
        let mut state = BillingState::default();
        let seq = state.begin_load();
        state.leave();
        assert!(!state.finish_load(seq, Ok(profile("pro"))));
        assert_eq!(state.profile.plan(), Plan::Free);
    }

    #[test]
    fn test_upgrade_sets_and_dismisses_notice() {
        let mut state = BillingState::default();
        state.upgrade("unlimited");
        assert_eq!(
            state.notice.as_deref(),
            Some("Payment integration coming soon! You selected the Unlimited plan for $39.")
        );
        state.dismiss_notice();
        assert_eq!(state.notice, None);

        state.upgrade("enterprise");
        assert_eq!(state.notice, None);
    }
}
