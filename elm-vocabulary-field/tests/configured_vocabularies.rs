//! Loading extra vocabularies through configuration

use std::fs;

use elm_vocabulary_field::{
    DisplaySettings, ElmFieldConfig, FieldDefinition, FieldItem, VocabularyFieldError,
    VocabularyFieldModule,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serial_test::serial;
use tempfile::TempDir;

fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let vocab_dir = dir.path().join("vocabularies");
    fs::create_dir_all(&vocab_dir).unwrap();
    fs::write(
        vocab_dir.join("credit.yaml"),
        "id: credit\nlabels:\n  en:\n    ects: European Credit Transfer System\n    local: Local credits\n    odd: 12\n",
    )
    .unwrap();

    let path = dir.path().join("elm.yaml");
    fs::write(
        &path,
        "vocabularies:\n  - id: credit\n    name: Credit system\n    path: vocabularies/credit.yaml\n",
    )
    .unwrap();
    path
}

#[test_log::test]
#[serial]
fn configured_vocabulary_is_listed_and_usable() {
    let dir = TempDir::new().unwrap();
    let config = ElmFieldConfig::load_from(&write_config(&dir)).unwrap();
    let module = VocabularyFieldModule::new(&config).unwrap();

    let list = module.provider().list();
    assert_eq!(list.len(), 7);
    assert_eq!(list.last().unwrap().0, "credit");

    let field = FieldDefinition::new("field_credit", "Credit", "credit");

    // The malformed `odd` label is not offered.
    let options = module.widget(DisplaySettings::default()).options(&field);
    assert_eq!(options.keys().collect::<Vec<_>>(), ["ects", "local"]);

    // It is still a storable code, since the vocabulary declares it.
    let violations = module
        .field_type()
        .validate(&field, &[FieldItem::new("odd")])
        .unwrap();
    assert!(violations.is_empty());

    // And renders as its raw code.
    let rendered = module
        .formatter(DisplaySettings::default())
        .view_elements(&field, &[FieldItem::new("odd"), FieldItem::new("ects")]);
    assert_eq!(rendered[0].markup, "odd");
    assert_eq!(rendered[1].markup, "European Credit Transfer System");

    let mut rng = StdRng::seed_from_u64(42);
    let sample = module.field_type().generate_sample_value(&field, &mut rng).unwrap();
    assert!(["ects", "local", "odd"].contains(&sample.code().unwrap()));
}

#[test]
#[serial]
fn broken_vocabulary_document_fails_module_startup() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.yaml"), "id: [").unwrap();
    let path = dir.path().join("elm.yaml");
    fs::write(
        &path,
        "vocabularies:\n  - id: broken\n    name: Broken\n    path: broken.yaml\n",
    )
    .unwrap();

    let config = ElmFieldConfig::load_from(&path).unwrap();
    let err = VocabularyFieldModule::new(&config).err().unwrap();
    assert!(matches!(err, VocabularyFieldError::Vocabulary(_)));
}
