#[path = "common/mod.rs"]
mod common;

use common::FakeSource;
use itembank::notice::DETAIL_LOAD_FAILED;
use itembank::{DetailController, DetailRecord};

fn record(json: &str) -> DetailRecord {
    serde_json::from_str(json).unwrap()
}

#[tokio::test]
async fn test_open_normalizes_each_group() {
    let source = FakeSource::new(0);
    source.add_detail(record(
        r#"{
            "id": 7,
            "label": "M7",
            "content_area": {"S2": 2.0, "S3": 1.0},
            "nuta": {"weights": {"c5_fractions": 0.25}}
        }"#,
    ));
    let details = DetailController::new(source.clone());

    let view = details.open(7).await.expect("detail view");
    assert_eq!(view.record.label.as_deref(), Some("M7"));

    let s2 = view.content_area.iter().find(|b| b.key == "s2").unwrap();
    let s3 = view.content_area.iter().find(|b| b.key == "s3").unwrap();
    assert_eq!(s2.percent, 100.0);
    assert_eq!(s3.percent, 50.0);
    assert!(view.content_area.iter().all(|b| (0.0..=100.0).contains(&b.percent)));
    assert!(view.targets.iter().all(|b| b.percent == 0.0));
    assert!(details.notice().is_none());
}

#[tokio::test]
async fn test_open_unknown_item_raises_notice() {
    let source = FakeSource::new(0);
    let details = DetailController::new(source);

    assert!(details.open(404).await.is_none());
    let notice = details.take_notice().expect("notice");
    assert_eq!(notice.message, DETAIL_LOAD_FAILED);
    let detail = notice.detail.unwrap();
    assert!(detail.contains("404"));
    assert!(detail.ends_with(": Item not found"), "{detail}");
    assert!(details.notice().is_none());
}

#[tokio::test]
async fn test_success_clears_previous_notice() {
    let source = FakeSource::new(0);
    source.add_detail(record(r#"{"id": 1}"#));
    let details = DetailController::new(source);

    assert!(details.open(2).await.is_none());
    assert!(details.notice().is_some());
    assert!(details.open(1).await.is_some());
    assert!(details.notice().is_none());
}
