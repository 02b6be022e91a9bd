//! End-to-end tests: form session -> weight check -> rendered Annexure-C

use std::path::PathBuf;

use annexure_app::config::Config;
use annexure_app::{generate, FormSession, Renderer};
use annexure_domain::model::ContainerSize;
use annexure_infra::{load_containers_csv, load_form_file};
use annexure_types::Error;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

fn renderer() -> Renderer {
    Renderer::from_config(&Config::default()).unwrap()
}

fn data_row_count(html: &str) -> usize {
    html.matches("<tr><td>").count()
}

#[test]
fn test_two_containers_scenario() {
    let mut session = FormSession::with_today(today());
    session.set_container_count(2);
    session.shipping_bill_no = "SB123456".to_string();
    session.gross_weight_kg = 100.0;
    session.net_weight_kg = 90.0;

    let document = generate(&session.read_form(), &renderer()).unwrap();
    let html = document.as_str();
    assert_eq!(data_row_count(html), 2);
    assert!(html.contains("SB123456"));
    assert!(html.contains("100.00 Kg"));
    assert!(html.contains("90.00 Kg"));
}

#[test]
fn test_net_above_gross_produces_no_document() {
    let mut session = FormSession::with_today(today());
    session.gross_weight_kg = 50.0;
    session.net_weight_kg = 60.0;

    match generate(&session.read_form(), &renderer()) {
        Err(Error::WeightConstraintViolation { gross_kg, net_kg }) => {
            assert_eq!(gross_kg, 50.0);
            assert_eq!(net_kg, 60.0);
        }
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("document generated for invalid weights"),
    }

    // values survive the rejection so the user can correct and resubmit
    assert_eq!(session.net_weight_kg, 60.0);
    session.net_weight_kg = 40.0;
    assert!(generate(&session.read_form(), &renderer()).is_ok());
}

#[test]
fn test_rows_follow_entry_order() {
    let mut session = FormSession::with_today(today());
    session.set_container_count(3);
    for (i, row) in session.containers_mut().iter_mut().enumerate() {
        row.number = format!("CONT{}", i + 1);
    }

    let html = generate(&session.read_form(), &renderer()).unwrap().into_string();
    assert_eq!(data_row_count(&html), 3);
    let first = html.find("CONT1").unwrap();
    let second = html.find("CONT2").unwrap();
    let third = html.find("CONT3").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_render_is_byte_identical() {
    let mut session = FormSession::with_today(today());
    session.shipping_bill_no = "SB42".to_string();
    session.package_type = "Bags".to_string();
    session.gross_weight_kg = 1500.0;
    session.net_weight_kg = 1500.0;
    session.set_container_count(2);
    let form = session.read_form();

    let first = generate(&form, &renderer()).unwrap();
    let second = generate(&form, &renderer()).unwrap();
    assert_eq!(first.as_str(), second.as_str());
    assert!(first.as_str().contains("1500.00 Kg"));
}

#[test]
fn test_count_change_reflected_in_next_render() {
    let mut session = FormSession::with_today(today());
    session.set_container_count(4);
    let html = generate(&session.read_form(), &renderer()).unwrap().into_string();
    assert_eq!(data_row_count(&html), 4);

    session.set_container_count(1);
    let html = generate(&session.read_form(), &renderer()).unwrap().into_string();
    assert_eq!(data_row_count(&html), 1);
}

#[test]
fn test_form_file_and_csv_to_document() {
    let dir = tempdir().unwrap();
    let form_path = dir.path().join("form.toml");
    std::fs::write(
        &form_path,
        r#"
shipping_bill_no = "SB777"
shipping_bill_date = "2024-07-09"
gross_weight_kg = 2000
net_weight_kg = 1800.5
package_type = "Boxes"
"#,
    )
    .unwrap();
    let csv_path = dir.path().join("containers.csv");
    std::fs::write(
        &csv_path,
        "Container No.,Size,Seal No.,Date of Sealing\nAAAU1111111,40 ft,S1,08-07-2024\nBBBU2222222,20 ft,S2,\n",
    )
    .unwrap();

    let mut session = FormSession::from_input(load_form_file(&form_path).unwrap(), today());
    session.replace_containers(load_containers_csv(&csv_path, today()).unwrap());
    let form = session.read_form();
    assert_eq!(form.containers[0].size, ContainerSize::FortyFt);

    let html = generate(&form, &renderer()).unwrap().into_string();
    assert_eq!(data_row_count(&html), 2);
    assert!(html.contains("09-07-2024"));
    assert!(html.contains("2000.00 Kg"));
    assert!(html.contains("1800.50 Kg"));
    assert!(html.contains("<tr><td>AAAU1111111</td><td>40 ft</td><td>S1</td><td>08-07-2024</td></tr>"));
    assert!(html.contains("<tr><td>BBBU2222222</td><td>20 ft</td><td>S2</td><td>05-03-2024</td></tr>"));
}

#[test]
fn test_saved_document_matches_render() {
    let dir = tempdir().unwrap();
    let mut session = FormSession::with_today(today());
    session.shipping_bill_no = "SB 1/2".to_string();
    let form = session.read_form();
    let document = generate(&form, &renderer()).unwrap();

    let path: PathBuf = dir.path().join(annexure_app::default_file_name(&form));
    document.save(&path).unwrap();
    assert!(path.ends_with("annexure-c-SB_1_2.html"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), document.into_string());
}

#[test]
fn test_non_finite_weights_in_form_file_never_render() {
    let dir = tempdir().unwrap();
    for (gross, net) in [("nan", "100.0"), ("inf", "100.0"), ("100.0", "nan")] {
        let path = dir.path().join("form.toml");
        std::fs::write(
            &path,
            format!("gross_weight_kg = {}\nnet_weight_kg = {}\n", gross, net),
        )
        .unwrap();

        let form = FormSession::from_input(load_form_file(&path).unwrap(), today()).read_form();
        assert!(form.gross_weight_kg.is_finite());
        assert!(form.net_weight_kg.is_finite());
        if let Ok(document) = generate(&form, &renderer()) {
            assert!(!document.as_str().contains("NaN"));
            assert!(!document.as_str().contains("inf Kg"));
        }
    }
}

#[test]
fn test_nan_weight_set_directly_is_rejected() {
    let mut session = FormSession::with_today(today());
    session.gross_weight_kg = f64::NAN;
    session.net_weight_kg = 100.0;
    assert!(matches!(
        generate(&session.read_form(), &renderer()),
        Err(Error::WeightConstraintViolation { .. })
    ));
}
