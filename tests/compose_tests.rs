//! Integration tests for the composition table.
//!
//! Tests cover:
//! - The kind of every cell in the 3x3 table, through [`Optic::kind`]
//! - Absence propagation and the set no-op through Prism-producing cells
//! - Literal materialization through Prism∘Iso and Lens∘Prism
//! - Iso-outer composition converting back to the source representation

use refract::{identity, some, Compose, Iso, Lens, Optic, OpticKind, Prism};
use rstest::rstest;

// =============================================================================
// The kind table
// =============================================================================

fn optic_of(kind: OpticKind) -> Optic<i32, i32> {
    match kind {
        OpticKind::Lens => Lens::new(|x: &i32| *x, |_, v| v).into(),
        OpticKind::Prism => Prism::new(|x: &i32| Some(*x), |_, v| v).into(),
        OpticKind::Iso => identity::<i32>().into(),
    }
}

#[rstest]
#[case(OpticKind::Lens, OpticKind::Lens, OpticKind::Lens)]
#[case(OpticKind::Lens, OpticKind::Prism, OpticKind::Prism)]
#[case(OpticKind::Lens, OpticKind::Iso, OpticKind::Lens)]
#[case(OpticKind::Prism, OpticKind::Lens, OpticKind::Prism)]
#[case(OpticKind::Prism, OpticKind::Prism, OpticKind::Prism)]
#[case(OpticKind::Prism, OpticKind::Iso, OpticKind::Prism)]
#[case(OpticKind::Iso, OpticKind::Lens, OpticKind::Lens)]
#[case(OpticKind::Iso, OpticKind::Prism, OpticKind::Prism)]
#[case(OpticKind::Iso, OpticKind::Iso, OpticKind::Iso)]
fn test_composition_kind_table(
    #[case] outer: OpticKind,
    #[case] inner: OpticKind,
    #[case] expected: OpticKind,
) {
    let composed = optic_of(outer).compose(optic_of(inner));
    assert_eq!(composed.kind(), expected);
}

// =============================================================================
// Prism . Prism: absence short-circuits get and set
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum Payload {
    Number(i32),
    Text(String),
}

#[derive(Clone, PartialEq, Debug)]
enum Message {
    Data(Payload),
    Heartbeat,
}

fn data_number() -> Prism<Message, i32> {
    refract::prism!(Message, Data).compose(refract::prism!(Payload, Number))
}

#[test]
fn test_prism_prism_get_through_both_branches() {
    let prism = data_number();
    assert_eq!(prism.preview(&Message::Data(Payload::Number(42))), Some(42));
}

#[rstest]
#[case(Message::Heartbeat)]
#[case(Message::Data(Payload::Text("hi".to_string())))]
fn test_prism_prism_get_none_when_any_branch_absent(#[case] source: Message) {
    assert_eq!(data_number().preview(&source), None);
}

#[test]
fn test_prism_prism_put_rebuilds_inner_branch() {
    let prism = data_number();
    let source = Message::Data(Payload::Text("hi".to_string()));
    assert_eq!(prism.put(source, 7), Message::Data(Payload::Number(7)));
}

#[rstest]
#[case(refract::Update::put(7))]
#[case(refract::Update::modify(|n| n + 1))]
fn test_prism_prism_set_no_op_on_missing_outer_branch(#[case] update: refract::Update<i32>) {
    let prism = data_number();
    assert_eq!(prism.set(Message::Heartbeat, update), Message::Heartbeat);
}

#[test]
fn test_prism_prism_modify_on_present_branches() {
    let prism = data_number();
    let source = Message::Data(Payload::Number(20));
    assert_eq!(
        prism.modify(source, |n| n * 2),
        Message::Data(Payload::Number(40))
    );
}

// =============================================================================
// Prism . Lens: the inner lens never runs over an absent outer branch
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Session {
    user: String,
    token: String,
}

#[derive(Clone, PartialEq, Debug)]
enum Auth {
    LoggedIn(Session),
    Anonymous,
}

fn session_token() -> Prism<Auth, String> {
    refract::prism!(Auth, LoggedIn).compose(refract::lens!(Session, token))
}

#[test]
fn test_prism_lens_reads_and_writes_through_the_branch() {
    let prism = session_token();
    let auth = Auth::LoggedIn(Session {
        user: "ada".to_string(),
        token: "t1".to_string(),
    });

    assert_eq!(prism.preview(&auth), Some("t1".to_string()));

    let refreshed = prism.put(auth, "t2".to_string());
    assert_eq!(
        refreshed,
        Auth::LoggedIn(Session {
            user: "ada".to_string(),
            token: "t2".to_string(),
        })
    );
}

#[rstest]
#[case(refract::Update::put("t2".to_string()))]
#[case(refract::Update::modify(|t: String| t.to_uppercase()))]
fn test_prism_lens_set_no_op_when_logged_out(#[case] update: refract::Update<String>) {
    let prism = session_token();
    assert_eq!(prism.set(Auth::Anonymous, update), Auth::Anonymous);
    assert_eq!(prism.preview(&Auth::Anonymous), None);
}

// =============================================================================
// Prism . Iso: a literal materializes through the outer setter
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Celsius(i32);

fn celsius_degrees() -> Iso<Celsius, i32> {
    Iso::new(|c: &Celsius| c.0, |degrees: &i32| Celsius(*degrees))
}

#[test]
fn test_prism_iso_put_materializes_over_absent_branch() {
    let prism = some::<Celsius>().compose(celsius_degrees());
    assert_eq!(prism.put(None, 20), Some(Celsius(20)));
}

#[test]
fn test_prism_iso_modify_is_no_op_over_absent_branch() {
    let prism = some::<Celsius>().compose(celsius_degrees());
    assert_eq!(prism.modify(None, |d| d + 5), None);
}

#[test]
fn test_prism_iso_round_trip_over_present_branch() {
    let prism = some::<Celsius>().compose(celsius_degrees());
    assert_eq!(prism.preview(&Some(Celsius(20))), Some(20));
    assert_eq!(prism.modify(Some(Celsius(20)), |d| d + 5), Some(Celsius(25)));
}

// =============================================================================
// Lens . Prism: the lens writes the inner prism's result back unconditionally
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Settings {
    theme: Option<String>,
    retries: u32,
}

fn settings_theme() -> Prism<Settings, String> {
    refract::lens!(Settings, theme).compose(some::<String>())
}

#[test]
fn test_lens_prism_put_materializes_the_optional_field() {
    let prism = settings_theme();
    let settings = Settings {
        theme: None,
        retries: 3,
    };

    let themed = prism.put(settings, "dark".to_string());
    assert_eq!(themed.theme, Some("dark".to_string()));
    assert_eq!(themed.retries, 3);
}

#[test]
fn test_lens_prism_modify_is_no_op_on_absent_field() {
    let prism = settings_theme();
    let settings = Settings {
        theme: None,
        retries: 3,
    };
    assert_eq!(prism.modify(settings.clone(), |t| t.to_uppercase()), settings);
}

#[test]
fn test_lens_prism_modify_on_present_field() {
    let prism = settings_theme();
    let settings = Settings {
        theme: Some("dark".to_string()),
        retries: 3,
    };
    let shouted = prism.modify(settings, |t| t.to_uppercase());
    assert_eq!(shouted.theme, Some("DARK".to_string()));
}

// =============================================================================
// Iso-outer cells
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Point {
    x: i32,
    y: i32,
}

fn point_pair() -> Iso<Point, (i32, i32)> {
    Iso::new(
        |point: &Point| (point.x, point.y),
        |pair: &(i32, i32)| Point {
            x: pair.0,
            y: pair.1,
        },
    )
}

#[test]
fn test_iso_lens_focuses_through_the_conversion() {
    let first = Lens::new(|pair: &(i32, i32)| pair.0, |pair: (i32, i32), v| (v, pair.1));
    let point_x = point_pair().compose(first);

    let point = Point { x: 1, y: 2 };
    assert_eq!(point_x.get(&point), 1);
    assert_eq!(point_x.put(point, 9), Point { x: 9, y: 2 });
}

#[test]
fn test_iso_prism_converts_back_after_the_inner_set() {
    let prism = identity::<Option<i32>>().compose(some::<i32>());

    assert_eq!(prism.preview(&Some(4)), Some(4));
    assert_eq!(prism.put(None, 4), Some(4));
    assert_eq!(prism.modify(None, |x| x + 1), None);
    assert_eq!(prism.modify(Some(4), |x| x + 1), Some(5));
}

#[derive(Clone, PartialEq, Debug)]
struct Reading {
    temperature: Celsius,
    sensor: String,
}

fn reading_degrees() -> Lens<Reading, i32> {
    refract::lens!(Reading, temperature).compose(celsius_degrees())
}

#[test]
fn test_lens_iso_modify_runs_in_the_target_representation() {
    let temperature = reading_degrees();

    let reading = Reading {
        temperature: Celsius(20),
        sensor: "roof".to_string(),
    };

    assert_eq!(temperature.get(&reading), 20);

    let warmer = temperature.modify(reading, |d| d + 5);
    assert_eq!(warmer.temperature, Celsius(25));
    assert_eq!(warmer.sensor, "roof");
}

#[test]
fn test_lens_iso_put_converts_the_literal_back() {
    let temperature = reading_degrees();

    let reading = Reading {
        temperature: Celsius(20),
        sensor: "roof".to_string(),
    };

    // The literal is converted through the iso and written by the lens.
    let pinned = temperature.put(reading, 30);
    assert_eq!(pinned.temperature, Celsius(30));
    assert_eq!(pinned.sensor, "roof");
    assert_eq!(temperature.get(&pinned), 30);
}

// =============================================================================
// The runtime-tagged path agrees with the static one
// =============================================================================

#[test]
fn test_tagged_composition_matches_static_behavior() {
    let outer: Optic<Message, Payload> = refract::prism!(Message, Data).into();
    let inner: Optic<Payload, i32> = refract::prism!(Payload, Number).into();
    let tagged = outer.compose(inner);

    assert_eq!(tagged.kind(), OpticKind::Prism);
    assert_eq!(tagged.preview(&Message::Data(Payload::Number(42))), Some(42));
    assert_eq!(tagged.preview(&Message::Heartbeat), None);
    assert_eq!(
        tagged.modify(Message::Heartbeat, |n| n + 1),
        Message::Heartbeat
    );
    assert_eq!(
        tagged.put(Message::Data(Payload::Number(1)), 2),
        Message::Data(Payload::Number(2))
    );
}
