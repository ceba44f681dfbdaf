//! Tests for the command-line front end.

use super::*;
use crate::domain::StoreErrorCode;
use crate::domain::ports::RemoteProfileSourceError;
use crate::outbound::memory::InMemoryProfileSource;
use clap::Parser;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> ProfileStore<InMemoryProfileSource> {
    ProfileStore::new(Arc::new(InMemoryProfileSource::new()))
}

fn parse(args: &[&str]) -> Command {
    Cli::try_parse_from(std::iter::once("profile-cli").chain(args.iter().copied()))
        .expect("arguments parse")
        .command
}

#[rstest]
#[case("isSeller=true", "isSeller", FieldValue::Flag(true))]
#[case("isSeller=false", "isSeller", FieldValue::Flag(false))]
#[case("name=Alex", "name", FieldValue::Text("Alex".to_owned()))]
#[case("phone=", "phone", FieldValue::Text(String::new()))]
#[case("note=a=b", "note", FieldValue::Text("a=b".to_owned()))]
#[case("isSeller=True", "isSeller", FieldValue::Text("True".to_owned()))]
fn assignments_split_on_the_first_equals(
    #[case] raw: &str,
    #[case] key: &str,
    #[case] value: FieldValue,
) {
    assert_eq!(parse_assignment(raw), Ok((key.to_owned(), value)));
}

#[rstest]
#[case("isSeller")]
#[case("=true")]
fn malformed_assignments_are_rejected(#[case] raw: &str) {
    assert!(parse_assignment(raw).is_err());
}

#[rstest]
fn update_requires_at_least_one_change() {
    let parsed = Cli::try_parse_from(["profile-cli", "update", "u1"]);

    assert!(parsed.is_err());
}

#[rstest]
#[case(&["save", "--uid", "u1"], true)]
#[case(&["update", "u1", "isSeller=true"], true)]
#[case(&["set-picture", "u1", "https://cdn.example.test/u1.png"], true)]
#[case(&["fetch", "u1"], false)]
#[case(&["tab", "nav_home"], false)]
fn only_writes_mutate(#[case] args: &[&str], #[case] expected: bool) {
    assert_eq!(parse(args).mutates(), expected);
}

#[rstest]
#[tokio::test]
async fn save_then_fetch_prints_the_profile(store: ProfileStore<InMemoryProfileSource>) {
    let saved = run(
        parse(&["save", "--uid", "u1", "--name", "Alex", "--seller"]),
        &store,
    )
    .await
    .expect("save");
    let fetched = run(parse(&["fetch", "u1"]), &store).await.expect("fetch");

    assert_eq!(saved, "saved u1");
    let json: serde_json::Value = serde_json::from_str(&fetched).expect("json output");
    assert_eq!(
        json,
        serde_json::json!({ "uid": "u1", "name": "Alex", "isSeller": true })
    );
}

#[rstest]
#[tokio::test]
async fn update_merges_typed_values(store: ProfileStore<InMemoryProfileSource>) {
    run(parse(&["save", "--uid", "u1", "--name", "Alex"]), &store)
        .await
        .expect("save");

    run(
        parse(&["update", "u1", "isSeller=true", "phone=0100"]),
        &store,
    )
    .await
    .expect("update");

    let profile = store.fetch(&UserId::new("u1")).await.expect("fetch");
    assert!(profile.is_seller());
    assert_eq!(profile.phone(), Some("0100"));
    assert_eq!(profile.name(), Some("Alex"));
}

#[rstest]
#[tokio::test]
async fn set_picture_updates_the_picture(store: ProfileStore<InMemoryProfileSource>) {
    run(parse(&["save", "--uid", "u1"]), &store)
        .await
        .expect("save");

    let output = run(
        parse(&["set-picture", "u1", "https://cdn.example.test/u1.png"]),
        &store,
    )
    .await
    .expect("set picture");

    assert_eq!(output, "updated u1");
    let profile = store.fetch(&UserId::new("u1")).await.expect("fetch");
    assert_eq!(
        profile.profile_picture_url(),
        Some("https://cdn.example.test/u1.png")
    );
}

#[rstest]
#[tokio::test]
async fn fetching_an_unknown_uid_is_a_store_error(store: ProfileStore<InMemoryProfileSource>) {
    let error = run(parse(&["fetch", "ghost"]), &store)
        .await
        .expect_err("not found");

    assert!(matches!(
        &error,
        CliError::Store(err) if err.code() == StoreErrorCode::NotFound
    ));
    assert_eq!(error.to_string(), "Profile not found");
}

#[rstest]
#[tokio::test]
async fn source_failures_surface_their_message(store: ProfileStore<InMemoryProfileSource>) {
    store
        .source()
        .fail_next_with(RemoteProfileSourceError::transport("network down"))
        .await;

    let error = run(parse(&["save", "--uid", "u1"]), &store)
        .await
        .expect_err("injected failure");

    assert_eq!(error.to_string(), "network down");
}

#[rstest]
#[tokio::test]
async fn home_tab_renders_home(store: ProfileStore<InMemoryProfileSource>) {
    let output = run(parse(&["tab", "nav_home"]), &store)
        .await
        .expect("tab");

    assert_eq!(output, HOME_VIEW);
}

#[rstest]
#[tokio::test]
async fn profile_tab_renders_the_stored_profile(store: ProfileStore<InMemoryProfileSource>) {
    store
        .save(UserProfile::builder("u1").name("Alex").phone("0100").build())
        .await
        .expect("save");

    let output = run(parse(&["tab", "nav_profile", "--uid", "u1"]), &store)
        .await
        .expect("tab");

    assert_eq!(
        output,
        "Name:    Alex\nPhone:   0100\nPicture: -\nSeller:  no"
    );
}

#[rstest]
#[tokio::test]
async fn profile_tab_shows_fetch_failures(store: ProfileStore<InMemoryProfileSource>) {
    let output = run(parse(&["tab", "nav_profile", "--uid", "ghost"]), &store)
        .await
        .expect("tab");

    assert_eq!(output, "Could not load profile: Profile not found");
}

#[rstest]
#[case(&["tab", "nav_orders"])]
#[case(&["tab", "nav_profile"])]
#[tokio::test]
async fn invalid_navigation_is_rejected(
    store: ProfileStore<InMemoryProfileSource>,
    #[case] args: &[&str],
) {
    let error = run(parse(args), &store).await.expect_err("invalid tab");

    assert!(matches!(
        error,
        CliError::UnknownNavigationItem(_) | CliError::MissingUid
    ));
}
