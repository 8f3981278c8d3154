// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use webdialog::config::settings::{BenignFailureSettings, NavigationSettings};

use crate::integration::helpers::load_settings;
use webdialog::domain::models::navigation::NavigationFailure;
use webdialog::domain::services::failure_filter::{
    FailureDisposition, FailureFilter, URL_ERROR_CANCELLED, URL_ERROR_DOMAIN,
    WEBKIT_ERROR_DOMAIN, WEBKIT_FRAME_LOAD_INTERRUPTED,
};

#[test]
fn test_user_cancellation_is_suppressed() {
    let filter = FailureFilter::default();
    let failure = NavigationFailure::new(URL_ERROR_DOMAIN, URL_ERROR_CANCELLED, "cancelled");
    assert!(filter.is_benign(&failure));
    assert_eq!(filter.classify_failure(&failure), FailureDisposition::Suppress);
}

#[test]
fn test_frame_load_interrupted_is_suppressed() {
    let filter = FailureFilter::default();
    let failure = NavigationFailure::new(
        WEBKIT_ERROR_DOMAIN,
        WEBKIT_FRAME_LOAD_INTERRUPTED,
        "Frame load interrupted",
    );
    assert_eq!(filter.classify_failure(&failure), FailureDisposition::Suppress);
}

#[test]
fn test_other_failures_are_forwarded() {
    let filter = FailureFilter::default();

    let timeout = NavigationFailure::new(URL_ERROR_DOMAIN, -1001, "The request timed out.");
    assert_eq!(filter.classify_failure(&timeout), FailureDisposition::Forward);

    // The code alone is not enough, the domain must match too
    let wrong_domain = NavigationFailure::new(WEBKIT_ERROR_DOMAIN, URL_ERROR_CANCELLED, "x");
    assert_eq!(filter.classify_failure(&wrong_domain), FailureDisposition::Forward);
}

#[test]
fn test_filter_from_settings() {
    let settings = NavigationSettings {
        benign_failures: vec![BenignFailureSettings {
            domain: "CustomDomain".to_string(),
            code: 7,
        }],
    };
    let filter = FailureFilter::from_settings(&settings);

    assert!(filter.is_benign(&NavigationFailure::new("CustomDomain", 7, "")));
    assert!(!filter.is_benign(&NavigationFailure::new(
        URL_ERROR_DOMAIN,
        URL_ERROR_CANCELLED,
        ""
    )));
}

#[test]
fn test_default_filter_matches_loaded_settings() {
    let dir = tempfile::tempdir().unwrap();
    let settings = load_settings(dir.path());

    assert_eq!(
        FailureFilter::from_settings(&settings.navigation),
        FailureFilter::default()
    );
    assert_eq!(
        FailureFilter::from_settings(&NavigationSettings::default()),
        FailureFilter::default()
    );
}
