//! End-to-end behaviour of the engine's public API.

use internpath_engine::{
    classify, generate, group_by_category, recommend, render_digest, resume_focus, score,
    severity_for_count, suggest_skills, Education, EngineError, InvalidInput, Opportunity,
    Profile, ProfileInput, Severity, SkillCatalog,
};

fn sample_opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity::new(1u64, "Frontend Developer Intern", ["React", "JavaScript", "CSS", "HTML"])
            .with_organization("TechCorp India")
            .with_location("Chennai, Remote")
            .with_terms("₹25,000/month", "6 months"),
        Opportunity::new(2u64, "UI/UX Design Intern", ["Figma", "Adobe XD", "User Research"])
            .with_organization("DesignHub")
            .with_location("Bangalore"),
        Opportunity::new(3u64, "Data Analyst Intern", ["Python", "SQL", "Excel", "Tableau"])
            .with_organization("DataInsights")
            .with_location("Hyderabad"),
    ]
}

fn sample_profile() -> Profile {
    let input: ProfileInput = serde_json::from_str(
        r#"{
            "name": "Priya",
            "skills": "React, JavaScript, HTML, Python",
            "education": "undergraduate",
            "interests": ["web development"],
            "location": "Chennai",
            "experience": "fresher",
            "domains": ["tech"]
        }"#,
    )
    .unwrap();
    Profile::from_input(input).unwrap()
}

// -----------------------------------------------------------------------------
// Scoring
// -----------------------------------------------------------------------------

#[test]
fn partial_match_scores_one_third() {
    let profile = Profile::new("A", Education::Undergraduate).with_skills(["react", "html"]);
    let opp = Opportunity::new(1u64, "Frontend", ["React", "CSS", "Node.js"]);
    let result = score(&profile, &opp).unwrap();

    assert_eq!(result.matched, vec!["React"]);
    assert_eq!(result.missing, vec!["CSS", "Node.js"]);
    assert_eq!(result.score, 33);
}

#[test]
fn empty_requirements_always_score_hundred() {
    let opp = Opportunity::new(1u64, "Open role", Vec::<&str>::new());
    for profile in [
        Profile::new("A", Education::HighSchool),
        sample_profile(),
    ] {
        let result = score(&profile, &opp).unwrap();
        assert_eq!(result.score, 100);
        assert!(result.matched.is_empty() && result.missing.is_empty());
    }
}

// -----------------------------------------------------------------------------
// Gap classification
// -----------------------------------------------------------------------------

#[test]
fn severity_boundaries() {
    let expected = [
        (0, Severity::None),
        (2, Severity::Low),
        (3, Severity::Medium),
        (5, Severity::Medium),
        (6, Severity::High),
    ];
    for (n, severity) in expected {
        let missing: Vec<String> = (0..n).map(|i| format!("s{i}")).collect();
        assert_eq!(classify(&missing).severity, severity, "n={n}");
        assert_eq!(severity_for_count(n as i64).unwrap(), severity);
    }
}

#[test]
fn negative_count_is_invalid_input() {
    let err = severity_for_count(-3).unwrap_err();
    assert!(err.to_string().starts_with("invalid input:"));
}

// -----------------------------------------------------------------------------
// Courses
// -----------------------------------------------------------------------------

#[test]
fn unknown_skills_have_no_course_and_do_not_fail() {
    let recs = recommend(&["Tableau", "SQL", "Python"], SkillCatalog::builtin());
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].skill, "Python");

    let groups = group_by_category(&recs);
    assert_eq!(groups.len(), 1);
    assert!(groups.contains_key("programming"));
}

// -----------------------------------------------------------------------------
// Pipeline
// -----------------------------------------------------------------------------

#[test]
fn sample_catalog_ranks_frontend_first() {
    let profile = sample_profile();
    let recs = generate(&profile, &sample_opportunities(), SkillCatalog::builtin()).unwrap();

    let titles: Vec<_> = recs.iter().map(|r| r.opportunity.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Frontend Developer Intern",
            "Data Analyst Intern",
            "UI/UX Design Intern"
        ]
    );

    let frontend = &recs[0];
    assert_eq!(frontend.score, 75);
    assert_eq!(frontend.missing_skills, vec!["CSS"]);
    assert_eq!(frontend.severity, Severity::Low);
    assert_eq!(
        frontend.fit_summary,
        "75% skill match; Location fit: Chennai; Education match"
    );

    let data = &recs[1];
    assert_eq!(data.score, 25);
    // None of the missing skills has a course in the built-in catalog.
    let without: Vec<_> = data.skills_without_course().collect();
    assert_eq!(without, vec!["SQL", "Excel", "Tableau"]);
    assert!(data.recommended_courses.is_empty());
}

#[test]
fn equal_scores_order_by_id() {
    let profile = Profile::new("A", Education::Diploma).with_skills(["sql"]);
    let opportunities = vec![
        Opportunity::new("zeta", "Z", ["SQL", "Go"]),
        Opportunity::new("alpha", "A", ["SQL", "Rust"]),
    ];
    let recs = generate(&profile, &opportunities, SkillCatalog::builtin()).unwrap();
    assert_eq!(recs[0].opportunity.id.as_str(), "alpha");
    assert_eq!(recs[1].opportunity.id.as_str(), "zeta");
}

#[test]
fn duplicate_ids_fail_instead_of_dropping() {
    let mut opportunities = sample_opportunities();
    opportunities.push(Opportunity::new(2u64, "Another design role", ["Figma"]));

    let err = generate(&sample_profile(), &opportunities, SkillCatalog::builtin()).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidInput(InvalidInput::DuplicateOpportunityId { ref id }) if id == "2"
    ));
}

#[test]
fn repeated_runs_produce_no_diff() {
    let profile = sample_profile();
    let opportunities = sample_opportunities();
    let runs: Vec<String> = (0..3)
        .map(|_| {
            let recs = generate(&profile, &opportunities, SkillCatalog::builtin()).unwrap();
            serde_json::to_string_pretty(&recs).unwrap()
        })
        .collect();
    assert!(runs.windows(2).all(|w| w[0] == w[1]));
}

// -----------------------------------------------------------------------------
// Collaborator helpers
// -----------------------------------------------------------------------------

#[test]
fn digest_resume_and_suggestions() {
    let profile = sample_profile();
    let recs = generate(&profile, &sample_opportunities(), SkillCatalog::builtin()).unwrap();

    assert_eq!(
        render_digest(&recs, 1),
        "Frontend Developer Intern at TechCorp India - 75% match"
    );

    let focus = resume_focus(&profile, &recs[0]);
    assert_eq!(&focus.skills[..3], &["React", "JavaScript", "HTML"]);
    assert_eq!(focus.skills[3], "python");

    let suggestions = suggest_skills(&profile);
    assert_eq!(suggestions[0], "Programming");
    assert!(!suggestions.iter().any(|s| s == "Python"));
}
