use crate::e2e::helpers;

use helpers::TestContext;
use voicebank_gen::domain::calendar::{Bank, CalendarUnit};
use voicebank_gen::domain::locale::{renderer_for, LanguageCode};
use voicebank_gen::domain::nameday::{NameDayError, NameDayTable};

#[tokio::test]
async fn it_should_announce_name_days_in_slovak_dates() {
    let ctx = TestContext::new().unwrap();
    let name_days = ctx.name_days().unwrap();

    ctx.generator(LanguageCode::Slovak, Some(name_days), false)
        .run(&[Bank::Date])
        .await
        .unwrap();

    let requests = ctx.tts.requests();
    let with_name_day = requests
        .iter()
        .filter(|(ssml, _)| ssml.contains("<p>Meniny má"))
        .count();
    assert_eq!(with_name_day, 4);
    assert!(requests.iter().any(|(ssml, _)| ssml
        == "<speak><p>Dnes je Dvadsiatydeviaty Február.</p><p>Meniny má Radomír.</p></speak>"));
}

#[test]
fn it_should_render_name_day_only_where_present() {
    let ctx = TestContext::new().unwrap();
    let renderer = renderer_for(LanguageCode::Slovak, Some(ctx.name_days().unwrap())).unwrap();

    let present = renderer.render(CalendarUnit::Date { month: 11, day: 23 });
    assert!(present.text.contains("Meniny má Adam, Eva."));

    let absent = renderer.render(CalendarUnit::Date { month: 11, day: 22 });
    assert!(!absent.text.contains("Meniny"));
}

#[test]
fn it_should_fail_loading_a_missing_table() {
    let ctx = TestContext::new().unwrap();
    let result = NameDayTable::load(ctx.output_root().join("does-not-exist.json"));
    assert!(matches!(result, Err(NameDayError::Read { .. })));
}
