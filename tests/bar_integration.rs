use barline::bar::{Bar, SnapshotEvent};
use barline::config::BarConfig;
use barline::default_registry;
use barline_core::Delivery;
use barline_render::MarkupMode;
use barline_types::{
    BatteryInfo, BatteryStatus, ClockConfig, LinkState, SeverityTier, Snapshot, SourceSpec, WlanInfo,
};
use chrono::{DateTime, TimeZone, Utc};

fn at(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap() + chrono::Duration::seconds(secs)
}

fn config(items: Vec<SourceSpec>) -> BarConfig {
    BarConfig {
        items,
        ..BarConfig::default()
    }
}

#[tokio::test]
async fn test_low_battery_is_bad() {
    let cfg = config(vec![SourceSpec::Battery]);
    let (mut bar, mut updates) = Bar::new(&cfg, &default_registry());

    // 9 of 60 Wh at 27 W: 15% and 20 minutes left
    let event = SnapshotEvent {
        item: 0,
        at: at(0),
        snapshot: Snapshot::Battery(BatteryInfo {
            status: BatteryStatus::Discharging,
            energy_now: 9.0,
            energy_full: 60.0,
            power: 27.0,
        }),
    };
    assert_eq!(bar.dispatch(event).unwrap(), Delivery::Published);
    assert!(bar.apply_pending(&mut updates));

    let output = bar.output(0).unwrap();
    assert_eq!(output.tier(), Some(SeverityTier::Bad));
    assert!(output.plain_text().contains("15%"));
    assert!(output.plain_text().contains("20m"));
}

#[tokio::test]
async fn test_missing_wifi_leaves_no_gap() {
    let cfg = config(vec![
        SourceSpec::Battery,
        SourceSpec::Wifi,
        SourceSpec::Clock(ClockConfig {
            timezone: "UTC".to_string(),
            format: "%H:%M".to_string(),
        }),
    ]);
    let (mut bar, mut updates) = Bar::new(&cfg, &default_registry());

    let events = [
        SnapshotEvent {
            item: 0,
            at: at(0),
            snapshot: Snapshot::Battery(BatteryInfo {
                status: BatteryStatus::Full,
                ..Default::default()
            }),
        },
        SnapshotEvent {
            item: 1,
            at: at(0),
            snapshot: Snapshot::Wifi(WlanInfo {
                state: LinkState::NotPresent,
                ..Default::default()
            }),
        },
        SnapshotEvent {
            item: 2,
            at: at(0),
            snapshot: serde_json::from_str(r#"{"kind": "clock", "at": "2024-03-09T14:05:07Z"}"#).unwrap(),
        },
    ];
    for event in events {
        bar.dispatch(event).unwrap();
    }
    bar.apply_pending(&mut updates);

    assert!(bar.output(1).is_none());
    assert_eq!(bar.render_line(), "FULL | 14:05");
}

#[tokio::test]
async fn test_pango_markup_colors_bad_items() {
    let mut cfg = config(vec![SourceSpec::Battery]);
    cfg.markup = MarkupMode::Pango;
    let (mut bar, mut updates) = Bar::new(&cfg, &default_registry());

    let event: SnapshotEvent = serde_json::from_str(
        r#"{"item": 0, "at": "2024-03-09T14:05:07Z",
            "snapshot": {"kind": "battery", "status": "discharging",
                         "energy_now": 5.0, "energy_full": 50.0, "power": 10.0}}"#,
    )
    .unwrap();
    bar.dispatch(event).unwrap();
    bar.apply_pending(&mut updates);

    let line = bar.render_line();
    assert!(line.starts_with("<span"));
    assert!(line.contains("#ff0000"));
}

#[tokio::test]
async fn test_out_of_range_times_drop_the_item() {
    let cfg = config(vec![SourceSpec::Battery, SourceSpec::Media(Default::default())]);
    let (mut bar, mut updates) = Bar::new(&cfg, &default_registry());

    let lines = [
        r#"{"item": 0, "at": "2024-03-09T14:05:07Z",
            "snapshot": {"kind": "battery", "status": "discharging",
                         "energy_now": 50, "energy_full": 60, "power": 1e-15}}"#,
        r#"{"item": 1, "at": "2024-03-09T14:05:07Z",
            "snapshot": {"kind": "media", "player": "mpd", "status": "paused",
                         "length_secs": 1e20, "position_at": "2024-03-09T14:05:00Z"}}"#,
    ];
    for line in lines {
        let event: SnapshotEvent = serde_json::from_str(line).unwrap();
        let err = bar.dispatch(event).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{}", err);
    }
    bar.apply_pending(&mut updates);
    assert_eq!(bar.render_line(), "");
}

#[test]
fn test_config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("barline").join("config.json");

    let config = config(vec![SourceSpec::LoadAverage, SourceSpec::Memory]);
    config.save_to_path(&path).unwrap();
    let loaded = BarConfig::load_from_path(&path).unwrap();
    assert_eq!(loaded.items, config.items);
    assert_eq!(loaded.separator, config.separator);
}
