use nsblock::declare::{DeclarationCursor, ScopeEndFinalizer};

use crate::support::MockSite;

#[test]
fn successive_injections_read_in_order() {
    let mut site = MockSite::at("ab", 1, "kw");
    let mut cursor = DeclarationCursor::new(&mut site);

    cursor.inject(0, "1");
    cursor.inject(0, "2");
    cursor.inject(0, "3");

    assert_eq!(cursor.offset(), 4);
    assert_eq!(site.buffer, "a123b");
}

#[test]
fn relative_injection_steps_over_the_skipped_text() {
    let mut site = MockSite::at("x{y", 1, "kw");
    let mut cursor = DeclarationCursor::new(&mut site);

    cursor.inject(1, " z;");

    assert_eq!(cursor.peek_remaining(), "y");
    assert_eq!(site.buffer, "x{ z;y");
}

#[test]
fn injection_past_the_end_appends() {
    let mut site = MockSite::at("abc", 3, "kw");
    let mut cursor = DeclarationCursor::new(&mut site);

    cursor.inject(10, ");");

    assert_eq!(cursor.offset(), 5);
    assert_eq!(site.buffer, "abc);");
}

#[test]
fn strip_removes_text_without_moving() {
    let mut site = MockSite::at("kw Foo rest", 2, "kw");
    let mut cursor = DeclarationCursor::new(&mut site);

    cursor.skip_insignificant();
    let removed = cursor.strip(3);

    assert_eq!(removed, "Foo");
    assert_eq!(cursor.offset(), 3);
    assert_eq!(cursor.peek_remaining(), " rest");
}

#[test]
fn peek_significant_skips_comments() {
    let mut site = MockSite::at("kw # note\n  Foo", 2, "kw");
    let cursor = DeclarationCursor::new(&mut site);

    assert_eq!(cursor.peek_significant(), "Foo");
    assert_eq!(cursor.offset(), 2);
}

#[test]
fn anchored_finalizer_is_registered_at_the_cursor() {
    let mut site = MockSite::at("kw { }", 3, "kw");
    let mut cursor = DeclarationCursor::new(&mut site);

    cursor.anchor_finalizer(ScopeEndFinalizer::new("kw"));

    assert_eq!(site.finalizers.len(), 1);
    assert_eq!(site.finalizers[0].0, 3);
    assert!(site.finalizers[0].1.is_armed());
}
