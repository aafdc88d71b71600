//! End-to-end runs of the bebe patch against a pre-patch copy of the brand
//! module.

use std::fs;
use std::path::{Path, PathBuf};

use brand_catalog::bebe;
use brand_catalog::prelude::*;
use pretty_assertions::assert_eq;

const BEFORE: &str = include_str!("fixtures/brands_before.ts");
const AFTER: &str = include_str!("fixtures/brands_after.ts");

fn stage(dir: &Path) -> PathBuf {
    let data = dir.join("src").join("data");
    fs::create_dir_all(&data).unwrap();
    let path = data.join("brands.ts");
    fs::write(&path, BEFORE).unwrap();
    path
}

#[test]
fn produces_expected_module() {
    let outcome = bebe::patch()
        .unwrap()
        .apply(BEFORE, &PatchOptions::default())
        .unwrap();

    assert!(outcome.anchor_matched);
    assert_eq!(outcome.inserted, 12);
    assert_eq!(outcome.content, AFTER);
}

#[test]
fn inserts_all_twelve_blocks_in_order() {
    let outcome = bebe::patch()
        .unwrap()
        .apply(BEFORE, &PatchOptions::default())
        .unwrap();

    let positions: Vec<usize> = (4..=15)
        .map(|n| {
            outcome
                .content
                .find(&format!("id: 'bebe-{}',", n))
                .unwrap_or_else(|| panic!("bebe-{} missing", n))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(outcome.content.contains(
        "        price: '$32',
        images: [
          { url: 'https://ext.same-assets.com/2255372474/2158947362.jpeg', alt: 'Statement Earrings in Gold' }
        ],
        tag: 'ACCESSORY',"
    ));
}

#[test]
fn rewrites_bebe_metadata() {
    let outcome = bebe::patch()
        .unwrap()
        .apply(BEFORE, &PatchOptions::default())
        .unwrap();

    assert!(outcome.content.contains("totalProducts: 15,"));
    assert!(outcome.content.contains("averagePrice: 88.53\n"));
    assert!(outcome.content.contains("updatedAt: '2025-01-05T00:30:00Z',"));
    assert!(!outcome.content.contains("totalProducts: 3,"));
    assert!(!outcome.content.contains("averagePrice: 144.67"));

    let counts: Vec<usize> = outcome.rewrites.iter().map(|r| r.replaced).collect();
    assert_eq!(counts, vec![1, 1, 1]);
}

#[test]
fn leaves_other_fields_alone() {
    let outcome = bebe::patch()
        .unwrap()
        .apply(BEFORE, &PatchOptions::default())
        .unwrap();

    // Same literal under a different key.
    assert!(outcome.content.contains("createdAt: '2025-01-04T15:30:00Z',"));
    assert!(outcome.content.contains("updatedAt: '2025-01-03T12:00:00Z',"));
    assert!(outcome.content.contains("totalProducts: 1,"));
    assert!(outcome.content.contains("averagePrice: 179.00"));
}

#[test]
fn products_array_stays_well_formed() {
    let outcome = bebe::patch()
        .unwrap()
        .apply(BEFORE, &PatchOptions::default())
        .unwrap();

    let junction = "        slug: generateSlug('3D Floral Strapless Gown', 'Black'),
        category: 'fashion'
      },
      {
        id: 'bebe-4',";
    assert!(outcome.content.contains(junction));

    let tail = "        slug: generateSlug('Statement Earrings', 'Gold'),
        category: 'fashion'
      }
    ],
    metadata: {";
    assert!(outcome.content.contains(tail));

    // Untouched text before the anchor and after the bebe block.
    let head_end = BEFORE.find("slug: generateSlug('3D Floral").unwrap();
    assert_eq!(&outcome.content[..head_end], &BEFORE[..head_end]);
    assert!(outcome.content.ends_with("export default BRANDS_DATABASE;\n"));
}

#[test]
fn second_run_does_not_reapply() {
    let patch = bebe::patch().unwrap();
    let first = patch.apply(BEFORE, &PatchOptions::default()).unwrap();

    let status = patch.inspect(&first.content, &PatchOptions::default()).unwrap();
    assert!(!status.anchor_matched);
    assert_eq!(status.already_applied.as_deref(), Some("bebe-4"));

    let err = patch
        .apply(&first.content, &PatchOptions::default())
        .unwrap_err();
    assert!(matches!(err, CatalogError::AlreadyApplied(_)));
}

#[test]
fn apply_to_file_rewrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = stage(dir.path());
    let patch = bebe::patch().unwrap();

    let outcome = apply_to_file(&path, &patch, &PatchOptions::default(), WriteMode::Write).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, outcome.content);
    assert_eq!(written, AFTER);
    assert!(!dir.path().join("src/data/brands.ts.bak").exists());

    let err = apply_to_file(&path, &patch, &PatchOptions::default(), WriteMode::Write).unwrap_err();
    assert!(matches!(err, CatalogError::AlreadyApplied(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), written);
}

#[test]
fn dry_run_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = stage(dir.path());

    let outcome = apply_to_file(
        &path,
        &bebe::patch().unwrap(),
        &PatchOptions::default(),
        WriteMode::DryRun,
    )
    .unwrap();
    assert_eq!(outcome.inserted, 12);
    assert_eq!(fs::read_to_string(&path).unwrap(), BEFORE);
}

#[test]
fn backup_keeps_original_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = stage(dir.path());

    apply_to_file(
        &path,
        &bebe::patch().unwrap(),
        &PatchOptions::default(),
        WriteMode::WriteWithBackup,
    )
    .unwrap();
    let backup = dir.path().join("src/data/brands.ts.bak");
    assert_eq!(fs::read_to_string(backup).unwrap(), BEFORE);
}

#[test]
fn missing_anchor_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = stage(dir.path());
    let moved = BEFORE.replace("'3D Floral Strapless Gown', 'Black'", "'3D Floral Strapless Gown', 'Ivory'");
    fs::write(&path, &moved).unwrap();

    let err = apply_to_file(
        &path,
        &bebe::patch().unwrap(),
        &PatchOptions::default(),
        WriteMode::Write,
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::AnchorNotFound { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), moved);
}

#[test]
fn outcome_serializes_without_content() {
    let outcome = bebe::patch()
        .unwrap()
        .apply(BEFORE, &PatchOptions::default())
        .unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["inserted"], 12);
    assert_eq!(json["rewrites"][0]["key"], "totalProducts");
    assert!(json.get("content").is_none());
}
