#[cfg(test)]
mod tests {
    use crate::core::{
        AuthMode, AuthRequest, FormState, TOPICS, entrance_delay_ms, passwords_mismatch,
        submission,
    };

    fn filled_register_form() -> FormState {
        FormState {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "s3cret".to_string(),
            confirm_password: "s3cret".to_string(),
            accept_terms: true,
            ..FormState::default()
        }
    }

    #[test]
    fn test_initial_form_state_is_empty() {
        let form = FormState::default();

        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
        assert!(form.confirm_password.is_empty());
        assert!(form.username.is_empty());
        assert!(!form.remember_me);
        assert!(!form.accept_terms);
    }

    #[test]
    fn test_tab_switch_reset_discards_all_fields() {
        // The form replaces its state with Default on every tab change;
        // the result must be indistinguishable from a fresh mount.
        let mut form = filled_register_form();
        form.username = "visitor".to_string();
        form.remember_me = true;
        assert_ne!(form, FormState::default());

        form = FormState::default();

        assert_eq!(form, FormState::default());
        assert_eq!(submission(AuthMode::Login, &form), None);
        assert_eq!(submission(AuthMode::Register, &form), None);
        assert_eq!(submission(AuthMode::Guest, &form), None);
    }

    #[test]
    fn test_login_requires_email_and_password() {
        let mut form = FormState::default();
        assert_eq!(submission(AuthMode::Login, &form), None);

        form.email = "a@b.com".to_string();
        assert_eq!(submission(AuthMode::Login, &form), None);

        form.email.clear();
        form.password = "x".to_string();
        assert_eq!(submission(AuthMode::Login, &form), None);
    }

    #[test]
    fn test_login_submits_exact_values() {
        let form = FormState {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            ..FormState::default()
        };

        assert_eq!(
            submission(AuthMode::Login, &form),
            Some(AuthRequest::Login {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
            })
        );
    }

    #[test]
    fn test_login_ignores_other_modes_fields() {
        // A username typed in guest mode must never make login pass.
        let form = FormState {
            username: "visitor".to_string(),
            ..FormState::default()
        };

        assert_eq!(submission(AuthMode::Login, &form), None);
    }

    #[test]
    fn test_register_happy_path() {
        let form = filled_register_form();

        assert_eq!(
            submission(AuthMode::Register, &form),
            Some(AuthRequest::Register {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                password: "s3cret".to_string(),
            })
        );
    }

    #[test]
    fn test_register_requires_every_field() {
        let clears: [fn(&mut FormState); 4] = [
            |f| f.name.clear(),
            |f| f.email.clear(),
            |f| f.password.clear(),
            |f| f.confirm_password.clear(),
        ];
        for clear in clears {
            let mut form = filled_register_form();
            clear(&mut form);
            assert_eq!(submission(AuthMode::Register, &form), None);
        }
    }

    #[test]
    fn test_register_suppressed_on_password_mismatch() {
        let mut form = filled_register_form();
        form.password = "p1".to_string();
        form.confirm_password = "p2".to_string();

        assert_eq!(submission(AuthMode::Register, &form), None);
        assert!(passwords_mismatch(&form));
    }

    #[test]
    fn test_register_suppressed_without_accepted_terms() {
        let mut form = filled_register_form();
        form.accept_terms = false;

        assert_eq!(submission(AuthMode::Register, &form), None);
    }

    #[test]
    fn test_guest_requires_two_trimmed_characters() {
        let mut form = FormState::default();
        assert_eq!(submission(AuthMode::Guest, &form), None);

        form.username = " a".to_string();
        assert_eq!(submission(AuthMode::Guest, &form), None);

        form.username = "a ".to_string();
        assert_eq!(submission(AuthMode::Guest, &form), None);

        form.username = "ab".to_string();
        assert_eq!(
            submission(AuthMode::Guest, &form),
            Some(AuthRequest::Guest {
                username: "ab".to_string(),
            })
        );
    }

    #[test]
    fn test_guest_submits_raw_untrimmed_username() {
        let form = FormState {
            username: "  ab  ".to_string(),
            ..FormState::default()
        };

        assert_eq!(
            submission(AuthMode::Guest, &form),
            Some(AuthRequest::Guest {
                username: "  ab  ".to_string(),
            })
        );
    }

    #[test]
    fn test_mismatch_hint_silent_while_confirm_empty() {
        let form = FormState {
            password: "p1".to_string(),
            ..FormState::default()
        };

        assert!(!passwords_mismatch(&form));
    }

    #[test]
    fn test_mismatch_hint_clears_when_passwords_agree() {
        let mut form = FormState {
            password: "p1".to_string(),
            confirm_password: "p2".to_string(),
            ..FormState::default()
        };
        assert!(passwords_mismatch(&form));

        form.confirm_password = "p1".to_string();
        assert!(!passwords_mismatch(&form));
    }

    #[test]
    fn test_auth_mode_defaults_to_login() {
        assert_eq!(AuthMode::default(), AuthMode::Login);
    }

    #[test]
    fn test_auth_mode_id_round_trip() {
        for mode in AuthMode::ALL {
            assert_eq!(AuthMode::from_id(mode.id()), mode);
        }

        // Unknown ids fall back to the initial mode.
        assert_eq!(AuthMode::from_id("nonsense"), AuthMode::Login);
    }

    #[test]
    fn test_topic_catalog_shape() {
        assert_eq!(TOPICS.len(), 6);

        let ids: Vec<&str> = TOPICS.iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            ["radio", "wifi", "mobile", "medical", "power", "satellite"]
        );

        for topic in TOPICS {
            assert!(!topic.title.is_empty());
            assert!(!topic.description.is_empty());
            assert!(!topic.details.is_empty());
            assert!(topic.accent.starts_with('#'));
        }
    }

    #[test]
    fn test_entrance_delay_is_base_plus_step() {
        assert_eq!(entrance_delay_ms(0), 800);
        assert_eq!(entrance_delay_ms(1), 900);
        assert_eq!(entrance_delay_ms(5), 1300);
    }
}
