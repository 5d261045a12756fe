use super::{build_meal_test, photo_url};
use whattoeat::{
    image_resolved, Event, FetchStatus, FetchToken, ImageFetchError, ImagePanel, MealEntry,
    Model, Screen,
};

#[test]
fn given_meal_selected_should_be_loading_before_the_request_finishes() {
    let mut test = build_meal_test().build();

    test.emit_and_process(Event::MealTimeChosen("morning".to_string()));

    assert_eq!(test.effects.pending(), 1);
    assert_eq!(test.model().image.status, FetchStatus::Loading);
    test.renders.with_last(|props| {
        assert_eq!(props.as_result().unwrap().image, ImagePanel::Loading);
    });
}

#[test]
fn given_provider_returns_no_results_should_fail_and_keep_the_meal() {
    let mut test = build_meal_test()
        .given_preference(whattoeat::Preference::Vegan)
        .given_image_results(vec![Err(ImageFetchError::NoResults)])
        .build();

    test.emit_and_process(Event::MealTimeChosen("lunch".to_string()));
    test.resolve_images();

    assert_eq!(
        test.model().image.status,
        FetchStatus::Failed(ImageFetchError::NoResults)
    );
    assert_eq!(
        test.model().selection.current_meal(),
        Some(&MealEntry::new("Vegan Salad", "vegan salad lunch"))
    );
    test.renders.with_last(|props| {
        let result = props.as_result().unwrap();
        assert_eq!(result.image, ImagePanel::Unavailable);
        assert_eq!(result.meal.name, "Vegan Salad");
    });
}

#[test]
fn given_failed_photo_refresh_and_back_should_still_work() {
    let mut test = build_meal_test()
        .given_image_results(vec![Err(ImageFetchError::Status(503))])
        .given_random_picks(vec![1])
        .build();
    test.emit_and_process(Event::MealTimeChosen("lunch".to_string()));
    test.resolve_images();

    test.emit_and_process(Event::RefreshRequested);
    test.resolve_images();

    assert_eq!(
        test.model().image.status,
        FetchStatus::Loaded(photo_url("salad lunch"))
    );

    test.emit_and_process(Event::BackRequested);
    assert_eq!(test.model().selection.screen, Screen::Browsing);
}

#[test]
fn given_two_quick_refreshes_when_first_resolves_last_should_keep_second_outcome() {
    let mut test = build_meal_test()
        .given_image_results(vec![
            Ok(photo_url("sandwich lunch")),
            Ok("https://images.test/stale".to_string()),
            Err(ImageFetchError::Transport("connection reset".to_string())),
        ])
        .given_random_picks(vec![1, 0])
        .build();
    test.emit_and_process(Event::MealTimeChosen("lunch".to_string()));
    test.resolve_images();

    test.emit_and_process(Event::RefreshRequested);
    test.emit_and_process(Event::RefreshRequested);
    assert_eq!(test.effects.pending(), 2);

    assert!(test.effects.run_newest());
    test.driver.process_events();
    test.resolve_images();

    assert_eq!(
        test.model().image.status,
        FetchStatus::Failed(ImageFetchError::Transport("connection reset".to_string()))
    );
    assert_eq!(
        test.model().selection.current_meal().map(|m| m.name.as_str()),
        Some("Sandwich")
    );
}

#[test]
fn given_two_quick_refreshes_when_both_pending_should_stay_loading_until_newest_resolves() {
    let mut test = build_meal_test().given_random_picks(vec![1, 1]).build();
    test.emit_and_process(Event::MealTimeChosen("dinner".to_string()));
    test.resolve_images();
    test.emit_and_process(Event::RefreshRequested);
    test.emit_and_process(Event::RefreshRequested);

    assert!(test.effects.run_at(0));
    test.driver.process_events();

    assert_eq!(test.model().image.status, FetchStatus::Loading);

    test.resolve_images();

    assert_eq!(
        test.model().image.status,
        FetchStatus::Loaded(photo_url("steak dinner"))
    );
}

#[test]
fn given_back_while_loading_when_photo_arrives_should_discard_it() {
    let mut test = build_meal_test().build();
    test.emit_and_process(Event::MealTimeChosen("dinner".to_string()));

    test.emit_and_process(Event::BackRequested);
    test.resolve_images();

    assert_eq!(test.model().selection.screen, Screen::Browsing);
    assert_eq!(test.model().image.status, FetchStatus::Idle);
    assert_eq!(test.model().image.current(), None);
}

#[test]
fn given_stale_token_merge_should_leave_model_untouched() {
    let model = Model::default();
    let (image, first) = model.image.begin();
    let (image, second) = image.begin();
    let model = Model { image, ..model };

    let after_stale = image_resolved(&model, first, Ok("https://images.test/old".to_string()));
    assert_eq!(after_stale, model);

    let after_current = image_resolved(&model, second, Err(ImageFetchError::NoResults));
    assert_eq!(
        after_current.image.status,
        FetchStatus::Failed(ImageFetchError::NoResults)
    );
    assert!(second > first);
}

#[test]
fn given_reset_should_never_reissue_a_token() {
    let model = Model::default();
    let (image, first) = model.image.begin();
    let (_, second) = image.reset().begin();

    assert_eq!(first, FetchToken(1));
    assert_eq!(second, FetchToken(2));
}
