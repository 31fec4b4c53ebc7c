use log::Level;

/// Webhook behind the waitlist, advisor and student forms.
pub const PRIMARY_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxJ1QeSTIrHzvtVHCIeCYo7pHyZ4mesfOTRtOaUEv2KgOdVsUcr12y7ckMI3xuoUtEw/exec";

/// Webhook behind the corporate "Contact Us" form.
pub const CONTACT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxgfNvHTuIFNnyHxyBn_qn_4qv1ZmPGWk90IQQGKcPwRpJtkz-K3QXwe69AZd4GnxNz/exec";

pub const SCHEDULING_URL: &str = "https://calendly.com/evrenyk";

/// Action label that switches a panel to the contact payload and endpoint.
pub const CONTACT_LABEL: &str = "Contact Us";

/// Panels with these titles keep their success view and offer a call.
pub const PERSISTENT_SUCCESS_TITLES: [&str; 2] = ["Corporations", "UMD Professors"];

pub const SUCCESS_REVERT_MS: u32 = 3_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn has_persistent_success(title: &str) -> bool {
    PERSISTENT_SUCCESS_TITLES.contains(&title)
}

pub fn endpoint_for(action_label: &str) -> &'static str {
    if action_label == CONTACT_LABEL {
        CONTACT_ENDPOINT
    } else {
        PRIMARY_ENDPOINT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_label_routes_to_contact_endpoint() {
        assert_eq!(endpoint_for("Contact Us"), CONTACT_ENDPOINT);
        assert_eq!(endpoint_for("Join Waitlist"), PRIMARY_ENDPOINT);
        assert_eq!(endpoint_for("Apply to Advise"), PRIMARY_ENDPOINT);
        assert_eq!(endpoint_for("contact us"), PRIMARY_ENDPOINT);
    }

    #[test]
    fn only_designated_titles_persist() {
        assert!(has_persistent_success("Corporations"));
        assert!(has_persistent_success("UMD Professors"));
        assert!(!has_persistent_success("UMD Students"));
        assert!(!has_persistent_success(""));
    }
}
