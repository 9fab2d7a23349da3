//! Tests for interaction subhandler routing.

use std::sync::Arc;

use rstest::rstest;

use super::support::CapturingSubhandler;
use crate::dispatch::domain::{EventKind, RegistrationError};
use crate::dispatch::ports::InteractionHandler;
use crate::dispatch::services::{Router, SubhandlerRegistry};

fn same_handler(
    left: Option<&Arc<dyn InteractionHandler>>,
    right: Option<&Arc<dyn InteractionHandler>>,
) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => Arc::ptr_eq(left, right),
        _ => false,
    }
}

#[rstest]
fn only_the_leading_token_routes_case_insensitively() {
    let mut registry = SubhandlerRegistry::new();
    registry
        .register(
            EventKind::MessageComponent,
            "partselect",
            Arc::new(CapturingSubhandler::default()),
        )
        .expect("partselect registers");

    let with_payload = registry.resolve(EventKind::MessageComponent, "PartSelect 123");
    let bare = registry.resolve(EventKind::MessageComponent, "partselect");

    assert!(with_payload.is_some());
    assert!(same_handler(with_payload, bare));
}

#[rstest]
#[case(EventKind::MessageComponent, "partpicker 123")]
#[case(EventKind::MessageComponent, "")]
#[case(EventKind::ModalSubmit, "partselect 123")]
fn unregistered_kind_or_token_resolves_to_none(#[case] kind: EventKind, #[case] identifier: &str) {
    let mut registry = SubhandlerRegistry::new();
    registry
        .register(
            EventKind::MessageComponent,
            "PartSelect",
            Arc::new(CapturingSubhandler::default()),
        )
        .expect("PartSelect registers");

    assert!(registry.resolve(kind, identifier).is_none());
}

#[rstest]
fn later_registration_overwrites_token() {
    let first: Arc<dyn InteractionHandler> = Arc::new(CapturingSubhandler::default());
    let second: Arc<dyn InteractionHandler> = Arc::new(CapturingSubhandler::default());
    let mut registry = SubhandlerRegistry::new();
    registry
        .register(EventKind::MessageComponent, "partselect", Arc::clone(&first))
        .expect("first registers");
    registry
        .register(EventKind::MessageComponent, "PARTSELECT", Arc::clone(&second))
        .expect("second registers");

    let resolved = registry.resolve(EventKind::MessageComponent, "partselect 1");

    assert!(same_handler(resolved, Some(&second)));
    assert!(!same_handler(resolved, Some(&first)));
}

#[rstest]
fn router_keeps_command_and_subhandler_tables_apart() {
    let mut router = Router::new();
    router
        .register_subhandler(
            EventKind::MessageComponent,
            "help",
            CapturingSubhandler::default(),
        )
        .expect("help subhandler registers");

    assert!(router.resolve_command("help").is_none());
    assert!(
        router
            .resolve_subhandler(EventKind::MessageComponent, "help")
            .is_some()
    );
}

#[rstest]
#[case("part select")]
#[case("")]
#[case("   ")]
#[case("part\tselect")]
fn tokens_that_cannot_route_are_rejected(#[case] token: &str) {
    let mut registry = SubhandlerRegistry::new();

    let result = registry.register(
        EventKind::MessageComponent,
        token,
        Arc::new(CapturingSubhandler::default()),
    );

    assert_eq!(
        result,
        Err(RegistrationError::InvalidSubhandlerToken(token.to_owned()))
    );
    for identifier in ["part select 123", "part select", "part", ""] {
        assert!(
            registry
                .resolve(EventKind::MessageComponent, identifier)
                .is_none()
        );
    }
}

#[rstest]
fn router_rejects_multi_word_subhandler_tokens() {
    let mut router = Router::new();

    let result = router.register_subhandler(
        EventKind::MessageComponent,
        "part select",
        CapturingSubhandler::default(),
    );

    assert!(matches!(
        result,
        Err(RegistrationError::InvalidSubhandlerToken(token)) if token == "part select"
    ));
}

#[rstest]
fn surrounding_whitespace_is_trimmed_before_validation() {
    let mut registry = SubhandlerRegistry::new();

    registry
        .register(
            EventKind::MessageComponent,
            "  partselect ",
            Arc::new(CapturingSubhandler::default()),
        )
        .expect("trimmed token registers");

    assert!(
        registry
            .resolve(EventKind::MessageComponent, "partselect 9")
            .is_some()
    );
}
