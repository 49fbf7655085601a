//! Records of many shapes, up to `MAX_ARITY` fields, generated by the build script.

include!(concat!(env!("OUT_DIR"), "/valid_records.rs"));

#[test]
fn widest_generated_record_is_the_bound() {
    assert_eq!(fieldwise::MAX_ARITY, if cfg!(feature = "wide") { 64 } else { 32 });
}
