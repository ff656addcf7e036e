use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn otto(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("otto").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_and_show_contact() {
    let dir = TempDir::new().unwrap();
    otto(&dir)
        .write_stdin("add_contact Alice 1234567890\nshow_all_contacts\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello my name is Otto."))
        .stdout(predicate::str::contains(
            "Contact name: Alice, Phones: 1234567890, Email: None, Birthday: None",
        ))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn invalid_phone_is_reported_and_not_saved() {
    let dir = TempDir::new().unwrap();
    otto(&dir)
        .write_stdin("add_contact Alice 12345\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid phone number '12345'"));

    let saved = fs::read_to_string(dir.path().join("address_book.json")).unwrap();
    assert!(!saved.contains("Alice"));
}

#[test]
fn data_survives_restart() {
    let dir = TempDir::new().unwrap();
    otto(&dir)
        .write_stdin("add_contact Bob 5555555555\nadd_email Bob bob@example.com\nclose\n")
        .assert()
        .success();

    let saved = fs::read_to_string(dir.path().join("address_book.json")).unwrap();
    assert!(saved.contains("\"birthday\": \"None\""));

    otto(&dir)
        .write_stdin("search_contacts bob\n.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Email: bob@example.com"));
}

#[test]
fn closed_stdin_still_saves() {
    let dir = TempDir::new().unwrap();
    otto(&dir)
        .write_stdin("add_contact Carol 7777777777\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good bye!"));

    let saved = fs::read_to_string(dir.path().join("address_book.json")).unwrap();
    assert!(saved.contains("Carol"));
}

#[test]
fn notes_roundtrip_and_search() {
    let dir = TempDir::new().unwrap();
    otto(&dir)
        .write_stdin("add_note\nChocolate Cake\ncocoa, flour\nbaking\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added"));

    otto(&dir)
        .write_stdin("search_note CAKE\nsearch_note pizza\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chocolate Cake"))
        .stdout(predicate::str::contains("- cocoa, flour"))
        .stdout(predicate::str::contains("No notes found matching 'pizza'"));
}

#[test]
fn config_changes_file_names() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"contacts_file": "people.json"}"#,
    )
    .unwrap();

    otto(&dir)
        .write_stdin("add_contact Dave 1212121212\nexit\n")
        .assert()
        .success();

    assert!(dir.path().join("people.json").exists());
    assert!(dir.path().join("notes.json").exists());
}

#[test]
fn corrupt_data_file_fails_start_up() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("address_book.json"), "{ not json").unwrap();

    otto(&dir)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn sort_files_through_the_prompt() {
    let dir = TempDir::new().unwrap();
    let downloads = dir.path().join("downloads");
    fs::create_dir_all(&downloads).unwrap();
    fs::write(downloads.join("song.mp3"), "x").unwrap();

    otto(&dir)
        .write_stdin(format!("sort_files {}\nexit\n", downloads.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Files sorted successfully."));

    assert!(downloads.join("audio/MP3/song.mp3").exists());
}

#[test]
fn invalid_utf8_line_does_not_end_session() {
    let dir = TempDir::new().unwrap();
    otto(&dir)
        .write_stdin(
            b"add_contact Alice 1234567890\nsearch_contacts \xff\xfe\nshow_all_contacts\nexit\n"
                .to_vec(),
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: Alice"))
        .stdout(predicate::str::contains("Good bye!"));

    let saved = fs::read_to_string(dir.path().join("address_book.json")).unwrap();
    assert!(saved.contains("Alice"));
}
