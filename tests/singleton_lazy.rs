// One test only: the printer must not exist before the first accessor call,
// which no parallel test in this binary could disturb.

use js_patterns::printer;

#[test]
fn test_printer_built_on_first_access_only() {
    assert_eq!(printer::constructions(), 0);

    let a = printer::instance().unwrap();
    assert_eq!(printer::constructions(), 1);

    let b = printer::instance().unwrap();
    let c = printer::instance().unwrap();

    assert!(std::ptr::eq(a, b));
    assert!(std::ptr::eq(b, c));
    assert_eq!(printer::constructions(), 1);
}
