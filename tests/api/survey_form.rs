use crate::helpers::spawn_app;

#[tokio::test]
async fn the_survey_form_is_served_blank() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_survey_form().await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"<form id="surveyForm" action="/surveys" method="post">"#));
    assert!(html_page.contains(r#"name="fullName" value="""#));
    assert!(!html_page.contains("checked"));
    assert!(!html_page.contains(r#"id="formMessage""#));
}

#[tokio::test]
async fn every_rendering_gets_its_own_submission_key() {
    let app = spawn_app().await;

    let first = app.get_survey_form_html().await;
    let second = app.get_survey_form_html().await;

    let key = |html: &str| {
        let start = html.find(r#"name="submissionKey" value=""#).unwrap() + 28;
        html[start..start + 36].to_string()
    };
    assert_ne!(key(&first), key(&second));
}

#[tokio::test]
async fn every_food_and_rating_is_offered() {
    let app = spawn_app().await;

    let html_page = app.get_survey_form_html().await;

    for food in ["Pizza", "Pasta", "Pap and Wors", "Others"] {
        assert!(html_page.contains(&format!(r#"name="favouriteFoods" value="{food}""#)));
    }
    for group in ["watchMovies", "listenRadio", "eatOut", "watchTV"] {
        assert!(html_page.contains(&format!(r#"name="{group}" value="Strongly Disagree""#)));
    }
}
