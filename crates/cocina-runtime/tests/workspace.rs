use anyhow::Result;
use cocina_extract::{Error as ExtractError, Extractor};
use cocina_runtime::{Cocina, Config};
use cocina_types::{ExtractedRecipe, PresentationMode, RecipeDraft, UserId};
use rusqlite::Connection;
use tempfile::TempDir;

struct Offline;

impl Extractor for Offline {
    fn extract(&self, _url: &str) -> cocina_extract::Result<ExtractedRecipe> {
        Err(ExtractError::Status {
            code: 503,
            body: String::new(),
        })
    }
}

struct Canned;

impl Extractor for Canned {
    fn extract(&self, _url: &str) -> cocina_extract::Result<ExtractedRecipe> {
        Ok(ExtractedRecipe {
            title: Some("Pulpo a la gallega".to_string()),
            ingredients: Some(vec!["1 pulpo".to_string(), "pimentón".to_string()]),
            ..ExtractedRecipe::default()
        })
    }
}

#[test]
fn records_survive_reopening() -> Result<()> {
    let dir = TempDir::new()?;
    let user = UserId::new("ana");

    {
        let cocina = Cocina::open(dir.path().to_path_buf())?;
        let gateway = cocina.gateway(user.clone());
        gateway.add(&RecipeDraft::default().with_title("Cocido"))?;
        gateway.add(&RecipeDraft::default().with_title("Fabada"))?;
    }

    let cocina = Cocina::open(dir.path().to_path_buf())?;
    let model = cocina.render(&user, &cocina.initial_state())?;
    let names: Vec<&str> = model.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Cocido", "Fabada"]);
    assert!(cocina.database_path().exists());
    Ok(())
}

#[test]
fn collections_are_per_user() -> Result<()> {
    let dir = TempDir::new()?;
    let cocina = Cocina::open(dir.path().to_path_buf())?;

    cocina
        .gateway(UserId::new("ana"))
        .add(&RecipeDraft::default().with_title("Cocido"))?;

    let other = cocina.render(&UserId::new("luis"), &cocina.initial_state())?;
    assert_eq!(other.total_items, 0);
    Ok(())
}

#[test]
fn configured_page_size_drives_initial_state() -> Result<()> {
    let dir = TempDir::new()?;
    let config = Config {
        page_size: Some(2),
        ..Config::default()
    };
    config.save_to(&Config::path_in(dir.path()))?;

    let cocina = Cocina::open(dir.path().to_path_buf())?;
    let gateway = cocina.gateway(UserId::new("ana"));
    for title in ["a", "b", "c"] {
        gateway.add(&RecipeDraft::default().with_title(title))?;
    }

    let model = cocina.render(&UserId::new("ana"), &cocina.initial_state())?;
    assert_eq!(model.total_pages(), 2);
    assert_eq!(model.rows.len(), 2);
    Ok(())
}

#[test]
fn import_survives_extraction_failure() -> Result<()> {
    let dir = TempDir::new()?;
    let cocina = Cocina::open(dir.path().to_path_buf())?;

    let outcome = cocina.import(
        UserId::new("ana"),
        "https://recetas.example.com/pulpo",
        RecipeDraft::default(),
        &Offline,
    )?;

    assert!(outcome.warning.unwrap().contains("503"));
    assert_eq!(outcome.recipe.url, "https://recetas.example.com/pulpo");
    assert_eq!(outcome.recipe.source, "recetas.example.com");
    assert_eq!(cocina.gateway(UserId::new("ana")).load()?.len(), 1);
    Ok(())
}

#[test]
fn import_applies_extraction() -> Result<()> {
    let dir = TempDir::new()?;
    let cocina = Cocina::open(dir.path().to_path_buf())?;

    let outcome = cocina.import(
        UserId::new("ana"),
        "https://recetas.example.com/pulpo",
        RecipeDraft::default().with_tags_text("Galicia"),
        &Canned,
    )?;

    assert!(outcome.warning.is_none());
    assert_eq!(outcome.recipe.title, "Pulpo a la gallega");
    assert_eq!(outcome.recipe.ingredients.len(), 2);
    assert_eq!(outcome.recipe.tags, vec!["galicia"]);
    Ok(())
}

#[test]
fn browse_mode_is_remembered_for_the_session_only() -> Result<()> {
    let dir = TempDir::new()?;
    let cocina = Cocina::open(dir.path().to_path_buf())?;
    let user = UserId::new("ana");

    {
        let mut session = cocina.browse(user.clone(), "session-a", cocina.initial_state())?;
        session.set_mode(PresentationMode::Table)?;
    }

    let again = cocina.browse(user.clone(), "session-a", cocina.initial_state())?;
    assert_eq!(again.state().mode, PresentationMode::Table);

    let fresh = cocina.browse(user, &Cocina::new_session_id(), cocina.initial_state())?;
    assert_eq!(fresh.state().mode, PresentationMode::Card);
    Ok(())
}

#[test]
fn ended_session_forgets_its_mode() -> Result<()> {
    let dir = TempDir::new()?;
    let cocina = Cocina::open(dir.path().to_path_buf())?;
    let user = UserId::new("ana");
    let session_id = Cocina::new_session_id();

    {
        let mut session = cocina.browse(user.clone(), &session_id, cocina.initial_state())?;
        session.set_mode(PresentationMode::Table)?;
    }
    cocina.end_session(&session_id)?;

    let reopened = cocina.browse(user, &session_id, cocina.initial_state())?;
    assert_eq!(reopened.state().mode, PresentationMode::Card);
    Ok(())
}

#[test]
fn unreadable_collection_is_not_overwritten() -> Result<()> {
    let dir = TempDir::new()?;
    let user = UserId::new("ana");
    let corrupt = r#"[{"id":"1","title":"Coc"#;

    {
        let cocina = Cocina::open(dir.path().to_path_buf())?;
        cocina
            .gateway(user.clone())
            .add(&RecipeDraft::default().with_title("Cocido"))?;

        let conn = Connection::open(cocina.database_path())?;
        conn.execute(
            "UPDATE collections SET records = ?1 WHERE user_id = 'ana'",
            [corrupt],
        )?;
    }

    let cocina = Cocina::open(dir.path().to_path_buf())?;
    let err = cocina
        .gateway(user.clone())
        .add(&RecipeDraft::default().with_title("Fabada"))
        .unwrap_err();
    assert!(err.to_string().contains("refusing to overwrite"));

    let conn = Connection::open(cocina.database_path())?;
    let stored: String = conn.query_row(
        "SELECT records FROM collections WHERE user_id = 'ana'",
        [],
        |row| row.get(0),
    )?;
    assert_eq!(stored, corrupt);
    Ok(())
}
