use facultad_electoral::{CensusRegistrar, ElectoralError, ElectoralRegistry, Facultad};
use facultad_types::{AgrupacionId, Ballot, Dni, Office, Periodo, Tenure, VoteKind};

#[tokio::test]
async fn rector_elected_by_a_student_council_member() {
    let model = Facultad::in_memory().await.unwrap();

    model.register_faculty(Dni(123), "Rector").await.unwrap();
    model.create_rector(Dni(123), Periodo(2014)).await.unwrap();

    model.register_student(Dni(456), "Consejero").await.unwrap();
    let agrupacion = model.create_grouping("G").await.unwrap();
    model
        .create_council_seat(Dni(456), Periodo(2014), agrupacion)
        .await
        .unwrap();

    let ballot = Ballot::new(Tenure::new(456, 2014), Tenure::new(123, 2014));
    model
        .record_vote(VoteKind::DirectiveToRector, ballot)
        .await
        .unwrap();

    let err = model
        .record_vote(VoteKind::DirectiveToRector, ballot)
        .await
        .unwrap_err();
    assert!(matches!(err, ElectoralError::DuplicateIdentity(_)), "{err}");
    assert!(model
        .vote_exists(VoteKind::DirectiveToRector, ballot)
        .await
        .unwrap());
}

#[tokio::test]
async fn one_elector_may_vote_in_several_relations_and_periods() {
    let model = Facultad::in_memory().await.unwrap();
    model.register_faculty(Dni(1), "Decana").await.unwrap();
    model.register_faculty(Dni(2), "Rector").await.unwrap();
    model.register_graduate(Dni(3), "Superior").await.unwrap();
    model.register_student(Dni(4), "Directivo").await.unwrap();
    let agrupacion = model.create_grouping("Lista 1").await.unwrap();

    for periodo in [Periodo(2014), Periodo(2018)] {
        model.create_dean(Dni(1), periodo).await.unwrap();
        model.create_rector(Dni(2), periodo).await.unwrap();
        model.create_council_seat_superior(Dni(3), periodo).await.unwrap();
        model.create_council_seat(Dni(4), periodo, agrupacion).await.unwrap();
    }

    let directive = Tenure::new(4, 2014);
    for (kind, target) in [
        (VoteKind::DirectiveToDean, Tenure::new(1, 2014)),
        (VoteKind::DirectiveToSuperior, Tenure::new(3, 2014)),
        (VoteKind::DirectiveToRector, Tenure::new(2, 2014)),
        (VoteKind::DirectiveToRector, Tenure::new(2, 2018)),
    ] {
        model
            .record_vote(kind, Ballot::new(directive, target))
            .await
            .unwrap();
    }

    model
        .record_vote(
            VoteKind::DeanToRector,
            Ballot::new(Tenure::new(1, 2018), Tenure::new(2, 2018)),
        )
        .await
        .unwrap();
    model
        .record_vote(
            VoteKind::SuperiorToRector,
            Ballot::new(Tenure::new(3, 2014), Tenure::new(2, 2014)),
        )
        .await
        .unwrap();

    assert!(model
        .holds_office(Office::ConsejeroDirectivo, directive)
        .await
        .unwrap());
}

#[tokio::test]
async fn unregistered_council_candidate_fails_before_grouping_lookup() {
    let model = Facultad::in_memory().await.unwrap();

    // Neither the person nor the grouping exists; the census check wins.
    let err = model
        .create_council_seat(Dni(123), Periodo(2014), AgrupacionId(0))
        .await
        .unwrap_err();
    assert!(matches!(err, ElectoralError::EligibilityViolation(_)), "{err}");

    model.register_student(Dni(123), "Alumno").await.unwrap();
    let err = model
        .create_council_seat(Dni(123), Periodo(2014), AgrupacionId(0))
        .await
        .unwrap_err();
    assert!(matches!(err, ElectoralError::ReferentialViolation(_)), "{err}");
}

#[tokio::test]
async fn registered_non_faculty_cannot_run_for_dean_or_rector() {
    let model = Facultad::in_memory().await.unwrap();
    model.register_student(Dni(10), "Alumno").await.unwrap();
    model.register_graduate(Dni(20), "Graduado").await.unwrap();

    for dni in [Dni(10), Dni(20), Dni(30)] {
        let dean = model.create_dean(dni, Periodo(2014)).await.unwrap_err();
        let rector = model.create_rector(dni, Periodo(2014)).await.unwrap_err();
        assert!(matches!(dean, ElectoralError::ReferentialViolation(_)), "{dean}");
        assert!(matches!(rector, ElectoralError::ReferentialViolation(_)), "{rector}");
    }
}
