#[cfg(test)]
mod portfolio_tests {
    mod visit_event_tests {
        use crate::portfolio::structs::visit_event::VisitEvent;

        #[test]
        fn test_from_parts_complete() {
            let event = VisitEvent::from_parts(
                Some(String::from("203.0.113.7")),
                Some(String::from("Mozilla/5.0")),
                "/"
            );
            assert_eq!(event.origin_address, "203.0.113.7");
            assert_eq!(event.client_signature, "Mozilla/5.0");
            assert_eq!(event.path, "/");
            assert!(event.observed_at > 0);
        }

        #[test]
        fn test_from_parts_substitutes_unknown_for_missing() {
            let event = VisitEvent::from_parts(None, None, "/contact");
            assert_eq!(event.origin_address, "unknown");
            assert_eq!(event.client_signature, "unknown");
        }

        #[test]
        fn test_from_parts_substitutes_unknown_for_empty() {
            let event = VisitEvent::from_parts(Some(String::new()), Some(String::new()), "/");
            assert_eq!(event.origin_address, "unknown");
            assert_eq!(event.client_signature, "unknown");
        }
    }

    mod contact_form_tests {
        use crate::portfolio::structs::contact_form::ContactForm;

        fn form(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> ContactForm {
            ContactForm {
                name: name.map(String::from),
                email: email.map(String::from),
                message: message.map(String::from),
            }
        }

        #[test]
        fn test_validate_complete_form() {
            assert!(form(Some("A"), Some("a@b.com"), Some("hi")).validate().is_ok());
        }

        #[test]
        fn test_validate_names_first_missing_field() {
            assert_eq!(form(None, Some("a@b.com"), Some("hi")).validate(), Err("name"));
            assert_eq!(form(Some("A"), None, Some("hi")).validate(), Err("email"));
            assert_eq!(form(Some("A"), Some("a@b.com"), None).validate(), Err("message"));
        }

        #[test]
        fn test_validate_rejects_blank_values() {
            assert_eq!(form(Some("   "), Some("a@b.com"), Some("hi")).validate(), Err("name"));
            assert_eq!(form(Some("A"), Some("a@b.com"), Some("")).validate(), Err("message"));
        }

        #[test]
        fn test_form_ignores_extra_fields() {
            let form: ContactForm = serde_json::from_str(
                r#"{"name": "A", "email": "a@b.com", "message": "hi", "phone": "0501234567", "subject": "x"}"#
            ).unwrap();
            assert!(form.validate().is_ok());
        }
    }

    mod error_tests {
        use crate::portfolio::enums::contact_error::ContactError;
        use crate::portfolio::enums::contact_status::ContactStatus;
        use crate::portfolio::enums::tracking_error::TrackingError;

        #[test]
        fn test_tracking_error_display() {
            assert_eq!(TrackingError::StoreUnavailable.to_string(), "store is not configured");
            assert_eq!(TrackingError::StoreTimeout(2).to_string(), "store operation timed out after 2 seconds");
        }

        #[test]
        fn test_contact_error_display_names_field() {
            assert_eq!(ContactError::Validation("message").to_string(), "missing field: message");
        }

        #[test]
        fn test_contact_status_serializes_lowercase() {
            assert_eq!(serde_json::to_string(&ContactStatus::New).unwrap(), "\"new\"");
            assert_eq!(ContactStatus::New.as_str(), "new");
        }
    }
}
