use super::*;

#[test]
fn root_is_active_only_on_exact_match() {
    assert!(is_nav_active("/admin", ADMIN_ROOT));
    assert!(is_nav_active("/admin/", ADMIN_ROOT));
    assert!(!is_nav_active("/admin/surcharges", ADMIN_ROOT));
}

#[test]
fn site_root_maps_to_admin_root() {
    assert!(is_nav_active("/", ADMIN_ROOT));
    assert!(!is_nav_active("/", "/admin/surcharges"));
}

#[test]
fn section_is_active_on_itself_and_sub_paths() {
    assert!(is_nav_active("/admin/surcharges", "/admin/surcharges"));
    assert!(is_nav_active("/admin/surcharges/", "/admin/surcharges"));
    assert!(is_nav_active("/admin/surcharges/abc", "/admin/surcharges"));
}

#[test]
fn section_is_not_active_on_shared_prefix() {
    assert!(!is_nav_active("/admin/surcharges-archive", "/admin/surcharges"));
}

#[test]
fn nav_items_are_unique() {
    for (i, a) in NAV_ITEMS.iter().enumerate() {
        for b in &NAV_ITEMS[i + 1..] {
            assert_ne!(a.href, b.href);
        }
    }
    assert_eq!(NAV_ITEMS[0].href, ADMIN_ROOT);
}
