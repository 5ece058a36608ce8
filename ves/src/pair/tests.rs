//! Unit tests for slot access and conversions on `ResultPair`.

use anyhow::{Result, ensure};
use rstest::rstest;

use super::ResultPair;
use crate::SlotsError;

#[rstest]
#[case(Some(3), None, Ok(ResultPair::Ok(3)))]
#[case(None, Some('e'), Ok(ResultPair::Failure('e')))]
#[case(Some(3), Some('e'), Err(SlotsError::BothPresent))]
#[case(None, None, Err(SlotsError::BothAbsent))]
fn from_slots_enforces_exactly_one_slot(
    #[case] value: Option<u8>,
    #[case] error: Option<char>,
    #[case] expected: Result<ResultPair<u8, char>, SlotsError>,
) -> Result<()> {
    let built = ResultPair::from_slots(value, error);
    ensure!(built == expected, "expected {expected:?}, got {built:?}");
    Ok(())
}

#[test]
fn slot_views_agree_with_variant() -> Result<()> {
    let ok: ResultPair<&str, char> = ResultPair::ok("ok");
    ensure!(ok.slots() == (Some(&"ok"), None), "borrowed slots of success");
    ensure!(ok.value() == Some(&"ok") && ok.error().is_none(), "accessors");
    ensure!(ok.is_ok() && !ok.is_failure(), "success flags");
    ensure!(ok.into_slots() == (Some("ok"), None), "owned slots of success");

    let failed: ResultPair<&str, char> = ResultPair::failure('x');
    ensure!(failed.slots() == (None, Some(&'x')), "borrowed slots of failure");
    ensure!(failed.is_failure() && !failed.is_ok(), "failure flags");
    ensure!(failed.into_slots() == (None, Some('x')), "owned slots of failure");
    Ok(())
}

#[test]
fn absent_shaped_value_stays_in_value_slot() -> Result<()> {
    let pair: ResultPair<Option<u8>, char> = ResultPair::ok(None);
    let (value, error) = pair.into_slots();
    ensure!(value == Some(None), "value slot holds the literal None");
    ensure!(error.is_none(), "error slot stays absent");
    Ok(())
}

#[test]
fn converts_to_and_from_result() -> Result<()> {
    let from_ok: ResultPair<u8, char> = Ok(1).into();
    ensure!(from_ok == ResultPair::Ok(1), "Ok maps onto the value slot");

    let from_err: ResultPair<u8, char> = Err('e').into();
    ensure!(from_err == ResultPair::Failure('e'), "Err maps onto the error slot");

    let back: Result<u8, char> = from_err.into();
    ensure!(back == Err('e'), "failure converts back to Err");
    ensure!(from_ok.into_result() == Ok(1), "success converts back to Ok");
    Ok(())
}

#[test]
fn map_touches_only_its_slot() -> Result<()> {
    let doubled = ResultPair::<u8, char>::Ok(2).map(|v| v * 2);
    ensure!(doubled == ResultPair::Ok(4), "value mapped");

    let untouched = ResultPair::<u8, char>::Failure('e').map(|v| v * 2);
    ensure!(untouched == ResultPair::Failure('e'), "failure kept");

    let described = ResultPair::<u8, char>::Failure('e').map_failure(|c| c.to_string());
    ensure!(described == ResultPair::Failure("e".to_owned()), "error mapped");
    Ok(())
}
