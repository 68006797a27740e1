mod common;

use chrono::NaiveDate;
use common::{date, Workspace};
use vacation_core::ledger::{LedgerEntry, LedgerStore};

fn recorded_at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 2)
        .unwrap()
        .and_hms_opt(14, 5, 9)
        .unwrap()
}

#[test]
fn header_is_written_once_across_appends() {
    let ws = Workspace::new();
    let store = LedgerStore::new(ws.root());
    let first = LedgerEntry::new(
        date("01.07.2024"),
        date("05.07.2024"),
        5,
        date("20.06.2024"),
        Some("Bern".into()),
        recorded_at(),
    );
    let second = LedgerEntry::new(
        date("23.12.2024"),
        date("27.12.2024"),
        3,
        date("01.12.2024"),
        Some("Zürich".into()),
        recorded_at(),
    );

    let path = store.append(2024, &first).unwrap();
    store.append(2024, &second).unwrap();
    assert_eq!(path, ws.path("2024/2024.csv"));

    let text = ws.read("2024/2024.csv");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "from,to,days,sign_date,sign_location,recorded_at",
            "01.07.2024,05.07.2024,5,20.06.2024,Bern,2024-05-02 14:05:09",
            "23.12.2024,27.12.2024,3,01.12.2024,Zürich,2024-05-02 14:05:09",
        ]
    );

    let loaded = store.load(2024).unwrap().unwrap();
    assert_eq!(loaded, vec![first, second]);
}

#[test]
fn entry_without_location_leaves_the_column_empty() {
    let ws = Workspace::new();
    let store = LedgerStore::new(ws.root());
    let entry = LedgerEntry::new(
        date("02.01.2025"),
        date("03.01.2025"),
        2,
        date("15.12.2024"),
        None,
        recorded_at(),
    );
    store.append(2025, &entry).unwrap();

    let text = ws.read("2025/2025.csv");
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        vec![
            "from,to,days,sign_date,sign_location,recorded_at",
            "02.01.2025,03.01.2025,2,15.12.2024,,2024-05-02 14:05:09",
        ]
    );
    assert_eq!(store.load(2025).unwrap().unwrap(), vec![entry]);
}

#[test]
fn mixed_location_rows_read_back_intact() {
    let ws = Workspace::new();
    let store = LedgerStore::new(ws.root());
    let without_location = LedgerEntry::new(
        date("01.07.2024"),
        date("01.07.2024"),
        1,
        date("20.06.2024"),
        None,
        recorded_at(),
    );
    let with_location = LedgerEntry::new(
        date("02.07.2024"),
        date("02.07.2024"),
        1,
        date("20.06.2024"),
        Some("Berlin".into()),
        recorded_at(),
    );
    store.append(2024, &without_location).unwrap();
    store.append(2024, &with_location).unwrap();

    let loaded = store.load(2024).unwrap().unwrap();
    assert_eq!(loaded[0].sign_location, None);
    assert_eq!(loaded[0].recorded_at, "2024-05-02 14:05:09");
    assert_eq!(loaded[1].sign_location.as_deref(), Some("Berlin"));
    assert_eq!(loaded[1].recorded_at, "2024-05-02 14:05:09");
    assert_eq!(loaded, vec![without_location, with_location]);
}

#[test]
fn appends_to_a_five_column_ledger_match_its_header() {
    let ws = Workspace::new();
    ws.write(
        "2023/2023.csv",
        "from,to,days,sign_date,datetime\n\
         07.08.2023,11.08.2023,5,01.07.2023,2023-07-01 10:00:00\n",
    );
    let store = LedgerStore::new(ws.root());
    let entry = LedgerEntry::new(
        date("18.12.2023"),
        date("19.12.2023"),
        2,
        date("01.12.2023"),
        Some("Bonn".into()),
        recorded_at(),
    );
    store.append(2023, &entry).unwrap();

    let text = ws.read("2023/2023.csv");
    assert_eq!(
        text.lines().last(),
        Some("18.12.2023,19.12.2023,2,01.12.2023,2024-05-02 14:05:09")
    );
    let loaded = store.load(2023).unwrap().unwrap();
    assert_eq!(loaded[1].recorded_at, "2024-05-02 14:05:09");
    assert_eq!(loaded[1].sign_location, None);
}

#[test]
fn empty_existing_file_gets_a_header() {
    let ws = Workspace::new();
    ws.write("2024/2024.csv", "");
    let store = LedgerStore::new(ws.root());
    let entry = LedgerEntry::new(
        date("04.03.2024"),
        date("04.03.2024"),
        1,
        date("01.03.2024"),
        None,
        recorded_at(),
    );
    store.append(2024, &entry).unwrap();
    assert!(ws.read("2024/2024.csv").starts_with("from,to,days"));
}

#[test]
fn legacy_timestamp_column_is_recognised() {
    let ws = Workspace::new();
    ws.write(
        "2023/2023.csv",
        "from,to,days,sign_date,datetime\n\
         07.08.2023,11.08.2023,5,01.07.2023,2023-07-01 10:00:00\n",
    );
    let store = LedgerStore::new(ws.root());
    let entries = store.load(2023).unwrap().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].recorded_at, "2023-07-01 10:00:00");
    assert_eq!(entries[0].days_taken(), Some(5));
    assert_eq!(entries[0].sign_location, None);
}

#[test]
fn rows_of_uneven_width_are_tolerated() {
    let ws = Workspace::new();
    ws.write(
        "2024/2024.csv",
        "from,to,days,sign_date,recorded_at\n\
         01.02.2024,02.02.2024,2\n\
         05.02.2024,05.02.2024,1,01.02.2024,2024-02-01 08:00:00,stray\n",
    );
    let store = LedgerStore::new(ws.root());
    let entries = store.load(2024).unwrap().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].sign_date, "");
    assert_eq!(entries[0].days_taken(), Some(2));
    assert_eq!(entries[1].recorded_at, "2024-02-01 08:00:00");
    assert_eq!(entries[1].sign_location, None);
}

#[test]
fn appending_after_a_location_row_keeps_the_existing_header() {
    let ws = Workspace::new();
    let store = LedgerStore::new(ws.root());
    let with_location = LedgerEntry::new(
        date("01.07.2024"),
        date("01.07.2024"),
        1,
        date("20.06.2024"),
        Some("Bern".into()),
        recorded_at(),
    );
    let without_location = LedgerEntry::new(
        date("02.07.2024"),
        date("02.07.2024"),
        1,
        date("20.06.2024"),
        None,
        recorded_at(),
    );
    store.append(2024, &with_location).unwrap();
    store.append(2024, &without_location).unwrap();

    let text = ws.read("2024/2024.csv");
    assert_eq!(text.lines().count(), 3);
    assert_eq!(
        text.lines().filter(|line| line.starts_with("from,")).count(),
        1
    );
}

#[test]
fn taken_vacations_unions_every_booked_day() {
    let ws = Workspace::new();
    ws.write(
        "2024/2024.csv",
        "from,to,days,sign_date,recorded_at\n\
         30.12.2024,31.12.2024,2,01.12.2024,2024-12-01 09:00:00\n\
         31.12.2024,31.12.2024,1,01.12.2024,2024-12-01 09:00:00\n\
         garbage,31.12.2024,1,01.12.2024,2024-12-01 09:00:00\n",
    );
    let store = LedgerStore::new(ws.root());
    let days = store.taken_vacations(2024).unwrap().unwrap();

    assert_eq!(days.len(), 2);
    assert!(days.contains(&date("30.12.2024")));
    assert!(days.contains(&date("31.12.2024")));
}
