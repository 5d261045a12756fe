use super::{build_meal_test, photo_url, scripted_images};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use whattoeat::{
    Catalog, Event, FetchStatus, MealController, MealEntry, MealTime, Model, Preference, Props,
    Screen, SelectionError, ThreadRandom,
};

#[test]
fn given_scripted_pick_when_refreshed_should_show_that_entry_and_fetch_again() {
    let mut test = build_meal_test().given_random_picks(vec![1]).build();
    test.emit_and_process(Event::MealTimeChosen("dinner".to_string()));
    test.resolve_images();

    test.emit_and_process(Event::RefreshRequested);

    assert_eq!(
        test.model().selection.current_meal(),
        Some(&MealEntry::new("Steak", "steak dinner"))
    );
    assert_eq!(test.model().image.status, FetchStatus::Loading);

    test.resolve_images();

    assert_eq!(
        test.model().image.status,
        FetchStatus::Loaded(photo_url("steak dinner"))
    );
    assert_eq!(
        test.fetched_queries(),
        vec!["spaghetti dinner".to_string(), "steak dinner".to_string()]
    );
}

#[test]
fn given_same_entry_drawn_again_should_still_fetch_again() {
    let mut test = build_meal_test().given_random_picks(vec![0]).build();
    test.emit_and_process(Event::MealTimeChosen("lunch".to_string()));
    test.resolve_images();

    test.emit_and_process(Event::RefreshRequested);

    assert_eq!(
        test.model().selection.current_meal().map(|m| m.name.as_str()),
        Some("Sandwich")
    );
    assert_eq!(test.fetched_queries().len(), 2);
}

#[test]
fn given_selector_when_refresh_requested_should_do_nothing() {
    let mut test = build_meal_test().build();

    test.emit_and_process(Event::RefreshRequested);

    assert_eq!(test.model(), &Model::default());
    assert!(test.fetched_queries().is_empty());
    assert_eq!(test.effects.pending(), 0);
}

#[test]
fn given_result_screen_when_refresh_callback_invoked_should_render_loading_panel() {
    let mut test = build_meal_test().given_random_picks(vec![1]).build();
    test.emit_and_process(Event::MealTimeChosen("morning".to_string()));
    test.resolve_images();

    test.renders.with_last(|props| match props {
        Props::Result(result) => (result.on_refresh)(),
        Props::Selector(_) => panic!("expected the result screen"),
    });
    test.driver.process_events();

    test.renders.with_last(|props| {
        let result = props.as_result().unwrap();
        assert_eq!(result.meal.name, "Pancakes");
        assert_eq!(result.image, whattoeat::ImagePanel::Loading);
    });
}

#[test]
fn given_preference_changed_while_viewing_when_refreshed_should_draw_from_new_list() {
    let mut test = build_meal_test().build();
    test.emit_and_process(Event::MealTimeChosen("lunch".to_string()));
    test.emit_and_process(Event::PreferenceChosen(Preference::Vegetarian));

    assert_eq!(
        test.model().selection.current_meal().map(|m| m.name.as_str()),
        Some("Sandwich")
    );

    test.emit_and_process(Event::RefreshRequested);

    assert_eq!(
        test.model().selection.current_meal(),
        Some(&MealEntry::new("Vegetarian Wrap", "vegetarian wrap lunch"))
    );
}

#[test]
fn given_new_preference_has_no_entries_when_refreshed_should_keep_meal_and_report_it() {
    let catalog = Catalog::from_entries([(
        MealTime::Lunch,
        Preference::Regular,
        vec![MealEntry::new("Sandwich", "sandwich lunch")],
    )]);
    let mut test = build_meal_test().given_catalog(catalog).build();
    test.emit_and_process(Event::MealTimeChosen("lunch".to_string()));
    test.resolve_images();
    test.emit_and_process(Event::PreferenceChosen(Preference::Vegan));

    test.emit_and_process(Event::RefreshRequested);

    assert!(matches!(test.model().selection.screen, Screen::Viewing { .. }));
    assert_eq!(
        test.model().selection.current_meal().map(|m| m.name.as_str()),
        Some("Sandwich")
    );
    assert_eq!(
        test.model().notice,
        Some(SelectionError::NoEntries {
            meal_time: MealTime::Lunch,
            preference: Preference::Vegan,
        })
    );
    assert_eq!(
        test.model().image.status,
        FetchStatus::Loaded(photo_url("sandwich lunch"))
    );
    assert_eq!(test.fetched_queries().len(), 1);
}

#[test]
fn given_many_refreshes_should_eventually_produce_every_entry() {
    let controller = MealController::with_random(
        Catalog::builtin(),
        scripted_images(vec![], Arc::new(Mutex::new(Vec::new()))),
        ThreadRandom,
    );
    let (mut model, _) = controller.select_meal_time(&Model::default(), "dinner");
    let list = controller.catalog().lookup(MealTime::Dinner, Preference::Regular);

    let mut seen = HashSet::new();
    for _ in 0..200 {
        let (next, _) = controller.refresh(&model);
        let meal = next.selection.current_meal().unwrap().clone();
        assert!(list.contains(&meal));
        seen.insert(meal.name);
        model = next;
    }

    assert_eq!(seen.len(), list.len());
}
