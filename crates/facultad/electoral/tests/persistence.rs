use facultad_electoral::{CensusRegistrar, ElectoralRegistry, Facultad, RegistrarDefaults};
use facultad_store::StoreConfig;
use facultad_types::{Claustro, Dni, Periodo};

#[tokio::test]
async fn census_and_offices_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::Sqlite {
        url: format!("sqlite://{}", dir.path().join("facultad.db").display()),
        max_connections: 2,
        connect_timeout_secs: 5,
    };

    let model = Facultad::open(&config, RegistrarDefaults::default())
        .await
        .unwrap();
    model.register_faculty(Dni(123), "Profesora").await.unwrap();
    model.create_dean(Dni(123), Periodo(2014)).await.unwrap();
    model.store().close().await;

    let reopened = Facultad::open(&config, RegistrarDefaults::default())
        .await
        .unwrap();
    let entry = reopened.census_entry(Dni(123)).await.unwrap().unwrap();
    assert_eq!(entry.claustro, Claustro::Profesores);

    // The dean row is still there, so a second creation is a duplicate.
    assert!(reopened.create_dean(Dni(123), Periodo(2014)).await.is_err());
    assert!(reopened.register_student(Dni(123), "Otra").await.is_err());
}
