// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;
use webdialog::domain::models::navigation::{
    ClassificationOutcome, DialogError, DialogResults, NavigationPolicy, NavigationRequest,
    NavigationType,
};
use webdialog::domain::services::navigation_classifier::{
    NavigationClassifier, DEFAULT_ERROR_DOMAIN,
};

fn classify(
    url: &str,
    navigation_type: NavigationType,
) -> (ClassificationOutcome, NavigationPolicy) {
    let request = NavigationRequest::new(Url::parse(url).unwrap(), navigation_type);
    NavigationClassifier::default().decide(&request)
}

fn results(pairs: &[(&str, &str)]) -> DialogResults {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_cancel_url_without_error_is_plain_cancel() {
    let (outcome, policy) = classify("fbconnect://cancel", NavigationType::Other);
    assert_eq!(outcome, ClassificationOutcome::Cancel);
    assert_eq!(policy, NavigationPolicy::Cancel);

    // Unrelated parameters do not turn a cancel into an error
    let (outcome, _) = classify("fbconnect://cancel?foo=bar", NavigationType::LinkActivated);
    assert_eq!(outcome, ClassificationOutcome::Cancel);
}

#[test]
fn test_cancel_url_with_error_fails() {
    let (outcome, policy) = classify(
        "fbconnect://cancel?error_code=999&error_message=anErrorOhNO",
        NavigationType::Other,
    );
    assert_eq!(
        outcome,
        ClassificationOutcome::FailWithError(DialogError::new(
            DEFAULT_ERROR_DOMAIN,
            999,
            "anErrorOhNO"
        ))
    );
    assert_eq!(policy, NavigationPolicy::Cancel);
}

#[test]
fn test_connect_url_without_query_or_fragment() {
    let (outcome, policy) = classify("fbconnect://foo", NavigationType::Other);
    assert_eq!(outcome, ClassificationOutcome::CompleteWithResults(results(&[])));
    assert_eq!(policy, NavigationPolicy::Cancel);
}

#[test]
fn test_connect_url_with_query() {
    let (outcome, _) = classify("fbconnect://foo?bar=baz", NavigationType::Other);
    assert_eq!(
        outcome,
        ClassificationOutcome::CompleteWithResults(results(&[("bar", "baz")]))
    );
}

#[test]
fn test_connect_url_with_fragment() {
    let (outcome, _) = classify("fbconnect://foo#fragment", NavigationType::Other);
    assert_eq!(
        outcome,
        ClassificationOutcome::CompleteWithResults(results(&[("fragment", "")]))
    );
}

#[test]
fn test_connect_url_with_query_and_fragment() {
    let (outcome, _) = classify("fbconnect://foo?bar=baz#fragment", NavigationType::Other);
    assert_eq!(
        outcome,
        ClassificationOutcome::CompleteWithResults(results(&[("bar", "baz"), ("fragment", "")]))
    );
}

#[test]
fn test_user_activated_link_opens_externally() {
    let url = "https://www.example.com/terms";
    let (outcome, policy) = classify(url, NavigationType::LinkActivated);
    assert_eq!(
        outcome,
        ClassificationOutcome::OpenExternally(Url::parse(url).unwrap())
    );
    assert_eq!(policy, NavigationPolicy::Cancel);
}

#[test]
fn test_non_activated_navigation_is_allowed() {
    for navigation_type in [
        NavigationType::Other,
        NavigationType::FormSubmitted,
        NavigationType::BackForward,
        NavigationType::Reload,
        NavigationType::FormResubmitted,
    ] {
        let (outcome, policy) = classify("https://www.example.com/dialog", navigation_type);
        assert_eq!(outcome, ClassificationOutcome::Allow);
        assert_eq!(policy, NavigationPolicy::Allow);
    }
}

#[test]
fn test_classification_is_idempotent() {
    let classifier = NavigationClassifier::default();
    let urls = [
        ("fbconnect://cancel", NavigationType::Other),
        ("fbconnect://cancel?error_code=1&error_message=x", NavigationType::Other),
        ("fbconnect://foo?bar=baz#fragment", NavigationType::Other),
        ("https://example.com", NavigationType::LinkActivated),
        ("https://example.com", NavigationType::Reload),
    ];

    for (url, navigation_type) in urls {
        let request = NavigationRequest::new(Url::parse(url).unwrap(), navigation_type);
        assert_eq!(classifier.classify(&request), classifier.classify(&request));
    }
}

#[test]
fn test_malformed_query_degrades_to_empty_results() {
    let (outcome, policy) = classify("fbconnect://foo?%zz=%E0%A4%A&x", NavigationType::Other);
    assert_eq!(outcome, ClassificationOutcome::CompleteWithResults(DialogResults::new()));
    assert_eq!(policy, NavigationPolicy::Cancel);

    // Invalid UTF-8 after decoding
    let (outcome, _) = classify("fbconnect://foo?a=%FF", NavigationType::Other);
    assert_eq!(outcome, ClassificationOutcome::CompleteWithResults(DialogResults::new()));

    // A malformed fragment only drops the fragment's own parameters
    let (outcome, _) = classify("fbconnect://foo?bar=baz#%zz", NavigationType::Other);
    assert_eq!(
        outcome,
        ClassificationOutcome::CompleteWithResults(results(&[("bar", "baz")]))
    );
}

#[test]
fn test_malformed_cancel_query_is_plain_cancel() {
    let (outcome, _) = classify(
        "fbconnect://cancel?error_code=%zz&error_message=bad",
        NavigationType::Other,
    );
    assert_eq!(outcome, ClassificationOutcome::Cancel);
}
