//! Tests for user/resource validation, access checks, sorting and lookup

use access_roster::*;

fn demo_system() -> AccessControlSystem {
    RosterConfig::default().build_system().unwrap()
}

/// Accessors return exactly the constructor arguments
#[test]
fn test_accessors_return_constructor_values() {
    for (name, id, level) in [("a", 0, 0), ("Igor", 1, 2), ("Very Long Name", -40, 1_000_000)] {
        let user = User::new(name, id, level).unwrap();
        assert_eq!(user.name(), name);
        assert_eq!(user.id(), UserId::new(id));
        assert_eq!(user.access_level(), level as u32);

        let resource = Resource::new(name, level).unwrap();
        assert_eq!(resource.name(), name);
        assert_eq!(resource.required_access_level(), level as u32);
    }
}

/// Empty names and negative levels never construct
#[test]
fn test_invalid_arguments_always_fail() {
    for level in [-1, -2, i32::MIN] {
        assert!(matches!(User::new("Igor", 1, level), Err(RosterError::InvalidArgument(_))));
        assert!(matches!(
            User::student("Igor", 1, level, "02"),
            Err(RosterError::InvalidArgument(_))
        ));
        assert!(matches!(Resource::new("Library", level), Err(RosterError::InvalidArgument(_))));
    }

    assert!(matches!(User::new("", 1, 1), Err(RosterError::InvalidArgument(_))));
    assert!(matches!(
        User::administrator("", 1, 1, "root"),
        Err(RosterError::InvalidArgument(_))
    ));
    assert!(matches!(Resource::new("", 1), Err(RosterError::InvalidArgument(_))));
}

/// Access is granted iff the user's level reaches the required level
#[test]
fn test_check_access_rule() {
    let levels = [0, 1, 2, 3, 10, i32::MAX];
    for &required in &levels {
        let resource = Resource::new("Door", required).unwrap();
        for &level in &levels {
            let user = User::new("Tester", 1, level).unwrap();
            assert_eq!(resource.check_access(&user), level >= required, "{} vs {}", level, required);
        }
    }
}

#[test]
fn test_full_access_matrix_for_demo_roster() {
    let system = demo_system();
    let lines: Vec<String> = system.check_access_for_all().iter().map(|c| c.to_string()).collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "Igor has access to Resource: Library, Required access level: 1");
    assert_eq!(
        lines[1],
        "Igor does NOT have access to Resource: Laboratory, Required access level: 3"
    );
    assert_eq!(
        lines[5],
        "Viktor has access to Resource: Server room, Required access level: 5"
    );
    assert_eq!(
        lines[8],
        "Natalya does NOT have access to Resource: Server room, Required access level: 5"
    );
}

#[test]
fn test_access_check_follows_sorted_order() {
    let mut system = demo_system();
    system.sort_users_by_access_level();

    let checks = system.check_access_for_all();
    let first_user = checks[0].user;
    assert_eq!(system.user(first_user).unwrap().name(), "Viktor");
    assert_eq!(checks[0].user_name, "Viktor");
}

/// After sorting the sequence is non-increasing in access level
#[test]
fn test_sorted_order_is_non_increasing() {
    let mut system = AccessControlSystem::new();
    for (i, level) in [3, 0, 7, 7, 1, 9, 2, 3].into_iter().enumerate() {
        system.add_user(User::new(format!("user{}", i), i as i64, level).unwrap());
    }

    system.sort_users_by_access_level();

    let levels: Vec<u32> = system.users().map(User::access_level).collect();
    assert!(levels.windows(2).all(|pair| pair[0] >= pair[1]), "{:?}", levels);
    assert_eq!(levels.len(), 8);
}

#[test]
fn test_display_all_users_after_sort() {
    let mut system = demo_system();
    system.sort_users_by_access_level();

    let mut out = Vec::new();
    system.display_all_users(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let non_separator: Vec<&str> = text.lines().filter(|l| *l != "---").collect();

    assert_eq!(
        non_separator,
        vec![
            "Administrator: Viktor, Role: System administrator, Access: 5",
            "Teacher: Natalya, Department: Computer Science, Access: 3",
            "Student: Igor, Group: 02, Access: 2",
        ]
    );
}

#[test]
fn test_find_user_by_name() {
    let system = demo_system();

    let handle = system.find_user_by_name("Natalya").unwrap();
    let natalya = system.user(handle).unwrap();
    assert_eq!(natalya.id(), UserId::new(2));
    assert_eq!(natalya.role(), &UserRole::Teacher { department: "Computer Science".to_string() });

    assert!(system.find_user_by_name("Nat").is_none());
}

#[test]
fn test_report_access_for_all_writes_one_line_per_pair() {
    let system = demo_system();
    let mut out = Vec::new();
    system.report_access_for_all(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 9);
    assert_eq!(text.lines().filter(|l| l.contains("does NOT")).count(), 3);
}
