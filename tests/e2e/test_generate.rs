use crate::e2e::helpers;

use helpers::tts_mocks::mock_audio_bytes;
use helpers::{count_files, TestContext};
use pretty_assertions::assert_eq;
use voicebank_gen::domain::calendar::Bank;
use voicebank_gen::domain::emitter::EmitterError;
use voicebank_gen::domain::locale::LanguageCode;
use voicebank_gen::domain::nameday::NameDayTable;

#[tokio::test]
async fn it_should_generate_every_bank_for_slovak() {
    let ctx = TestContext::new().unwrap();
    let name_days = ctx.name_days().unwrap();

    let summary = ctx
        .generator(LanguageCode::Slovak, Some(name_days), false)
        .run(&Bank::DEFAULT_SEQUENCE)
        .await
        .unwrap();

    assert_eq!(summary.files_written, 1440 + 7 + 366);
    assert_eq!(ctx.tts.call_count(), 1813);

    let locale = ctx.locale_dir(LanguageCode::Slovak);
    assert_eq!(count_files(&locale.join("time")), 1440);
    assert_eq!(count_files(&locale.join("dow")), 7);
    assert_eq!(count_files(&locale.join("date")), 366);

    assert_eq!(
        std::fs::read(locale.join("time/13/05.mp3")).unwrap(),
        mock_audio_bytes()
    );
    assert!(locale.join("date/02/29.mp3").exists());
    assert!(locale.join("dow/7.mp3").exists());
}

#[tokio::test]
async fn it_should_send_speak_documents_with_the_locale_language() {
    let ctx = TestContext::new().unwrap();

    ctx.generator(LanguageCode::Slovak, Some(NameDayTable::default()), false)
        .run(&[Bank::Time])
        .await
        .unwrap();

    let requests = ctx.tts.requests();
    assert!(requests
        .iter()
        .all(|(ssml, language)| ssml.starts_with("<speak><p>")
            && ssml.ends_with("</p></speak>")
            && *language == LanguageCode::Slovak));
    assert!(requests.iter().any(|(ssml, _)| ssml
        == "<speak><p>Práve je trinásť hodín a päť minút poobede.</p></speak>"));
}

#[tokio::test]
async fn it_should_generate_only_the_configured_banks() {
    let ctx = TestContext::new().unwrap();

    let summary = ctx
        .generator(LanguageCode::English, None, false)
        .run(&[Bank::Dow])
        .await
        .unwrap();

    assert_eq!(summary.total_items(), 7);
    let locale = ctx.locale_dir(LanguageCode::English);
    assert!(locale.join("dow/1.mp3").exists());
    assert!(!locale.join("time").exists());
    assert!(!locale.join("date").exists());
}

#[tokio::test]
async fn it_should_abort_the_run_on_synthesis_failure() {
    let ctx = TestContext::with_failure_after(10).unwrap();

    let result = ctx
        .generator(LanguageCode::English, None, false)
        .run(&[Bank::Dow, Bank::Time])
        .await;

    match result {
        Err(EmitterError::Synthesis { message, .. }) => {
            assert_eq!(message, "mock synthesis outage")
        }
        other => panic!("expected synthesis error, got {:?}", other),
    }

    // 7 weekdays plus 3 times made it to disk before the outage
    assert_eq!(ctx.tts.call_count(), 11);
    assert_eq!(count_files(ctx.output_root()), 10);
}

#[tokio::test]
async fn it_should_synthesize_direct_text_into_file_mp3() {
    let ctx = TestContext::new().unwrap();

    ctx.generator(LanguageCode::Slovak, Some(NameDayTable::default()), false)
        .synthesize_direct("Ahoj svet")
        .await
        .unwrap();

    assert!(ctx.locale_dir(LanguageCode::Slovak).join("file.mp3").exists());
    assert_eq!(
        ctx.tts.requests(),
        vec![("<speak>Ahoj svet</speak>".to_string(), LanguageCode::Slovak)]
    );
}
