use cybernode::content::{Portfolio, Section};

#[test]
fn embedded_portfolio_is_consistent() {
    let portfolio = Portfolio::load().unwrap();

    for item in &portfolio.nav {
        assert!(Section::from_anchor(&item.href).is_some(), "{}", item.href);
    }
    for project in &portfolio.projects {
        assert!(!project.tech_stack.is_empty(), "{} has no stack", project.id);
        assert!(project.github_url.starts_with("https://"));
    }

    let outline = portfolio.outline();
    assert!(outline.contains(&portfolio.hero.name));
    assert!(outline.contains("omsatote142005@gmail.com"));
}
