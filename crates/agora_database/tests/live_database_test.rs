//! End-to-end tests against a live PostgreSQL database.
//!
//! Ignored by default: they need `DATABASE_URL` pointing at a database the
//! tests may write to. Run with `cargo test -- --ignored`.

use agora_core::{NewProfile, NewThread, PrivateProfile, PublicProfile, ThreadPage};
use agora_database::{
    delete_thread_by_thread_id, establish_connection, insert_profile, insert_thread,
    run_migrations, select_all_reply_threads_by_thread_id, select_all_threads,
    select_page_of_threads, select_private_profile_by_profile_activation_token,
    select_private_profile_by_profile_email, select_private_profile_by_profile_id,
    select_public_profile_by_profile_id, select_public_profile_by_profile_name,
    select_public_profiles_by_profile_name, select_thread_by_thread_id,
    select_threads_by_profile_name, select_threads_by_thread_profile_id, update_profile,
};
use diesel::pg::PgConnection;
use uuid::Uuid;

fn connection() -> PgConnection {
    let mut conn = establish_connection().expect("DATABASE_URL must point at a test database");
    run_migrations(&mut conn).expect("migrations apply");
    conn
}

/// Short unique tag so test rows never collide across runs.
fn tag() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

fn sample_hash() -> String {
    "h".repeat(97)
}

fn insert_test_profile(conn: &mut PgConnection, profile_name: &str) -> PrivateProfile {
    let profile_email = format!("{profile_name}@example.com");
    let draft = NewProfile {
        profile_about: Some("integration test profile".to_string()),
        profile_activation_token: Some(Uuid::new_v4().simple().to_string()),
        profile_email: profile_email.clone(),
        profile_hash: sample_hash(),
        profile_image_url: Some("https://example.com/avatar.png".to_string()),
        profile_name: profile_name.to_string(),
    };
    let message = insert_profile(conn, draft).unwrap();
    assert_eq!(message, "Profile Successfully Created");

    select_private_profile_by_profile_email(conn, &profile_email)
        .unwrap()
        .expect("profile was just inserted")
}

fn insert_test_thread(
    conn: &mut PgConnection,
    profile_id: Uuid,
    reply_to: Option<Uuid>,
    content: &str,
) {
    let message = insert_thread(
        conn,
        NewThread {
            thread_profile_id: profile_id,
            thread_reply_thread_id: reply_to,
            thread_content: content.to_string(),
            thread_image_url: None,
        },
    )
    .unwrap();
    assert_eq!(message, "Thread successfully posted");
}

#[test]
#[ignore = "requires a live PostgreSQL database via DATABASE_URL"]
fn profile_insert_then_select_roundtrips_every_field() {
    let mut conn = connection();
    let name = format!("alice-{}", tag());
    let private = insert_test_profile(&mut conn, &name);

    assert_eq!(private.profile_name, name);
    assert_eq!(private.profile_email, format!("{name}@example.com"));
    assert_eq!(private.profile_hash, sample_hash());
    assert_eq!(
        private.profile_about.as_deref(),
        Some("integration test profile")
    );

    let by_id = select_private_profile_by_profile_id(&mut conn, private.profile_id)
        .unwrap()
        .expect("lookup by id finds the row");
    assert_eq!(by_id, private);

    let public = select_public_profile_by_profile_id(&mut conn, private.profile_id)
        .unwrap()
        .expect("public lookup finds the row");
    assert_eq!(public, PublicProfile::from(private));
}

#[test]
#[ignore = "requires a live PostgreSQL database via DATABASE_URL"]
fn lookup_misses_are_none_not_errors() {
    let mut conn = connection();

    let by_email =
        select_private_profile_by_profile_email(&mut conn, "nobody@example.invalid").unwrap();
    assert_eq!(by_email, None);

    let by_id = select_private_profile_by_profile_id(&mut conn, Uuid::new_v4()).unwrap();
    assert_eq!(by_id, None);

    let by_thread_id = select_thread_by_thread_id(&mut conn, Uuid::new_v4()).unwrap();
    assert_eq!(by_thread_id, None);
}

#[test]
#[ignore = "requires a live PostgreSQL database via DATABASE_URL"]
fn activation_token_resolves_back_to_its_profile() {
    let mut conn = connection();
    let private = insert_test_profile(&mut conn, &format!("erin-{}", tag()));
    let token = private
        .profile_activation_token
        .clone()
        .expect("inserted with a token");

    let found = select_private_profile_by_profile_activation_token(&mut conn, &token)
        .unwrap()
        .expect("token lookup finds the row");
    assert_eq!(found.profile_id, private.profile_id);
}

#[test]
#[ignore = "requires a live PostgreSQL database via DATABASE_URL"]
fn name_search_matches_by_containment() {
    let mut conn = connection();
    let shared = tag();
    let alice = format!("alice-{shared}");
    let natalia = format!("natalia-{shared}");
    insert_test_profile(&mut conn, &alice);
    insert_test_profile(&mut conn, &natalia);

    // The shared fragment sits mid-name for both, so prefix matching would
    // find neither.
    let matches = select_public_profiles_by_profile_name(&mut conn, &shared).unwrap();
    let names: Vec<&str> = matches.iter().map(|p| p.profile_name.as_str()).collect();
    assert!(names.contains(&alice.as_str()));
    assert!(names.contains(&natalia.as_str()));

    let exact = select_public_profile_by_profile_name(&mut conn, &alice)
        .unwrap()
        .expect("exact name lookup finds the row");
    assert_eq!(exact.profile_name, alice);
}

#[test]
#[ignore = "requires a live PostgreSQL database via DATABASE_URL"]
fn update_overwrites_the_full_row_including_nulls() {
    let mut conn = connection();
    let mut private = insert_test_profile(&mut conn, &format!("frank-{}", tag()));

    // Activation clears the token; the overwrite must write the null.
    private.profile_activation_token = None;
    private.profile_about = Some("updated about".to_string());
    private.profile_image_url = None;

    let message = update_profile(&mut conn, private.clone()).unwrap();
    assert_eq!(message, "Profile successfully updated");

    let reloaded = select_private_profile_by_profile_id(&mut conn, private.profile_id)
        .unwrap()
        .expect("row still present");
    assert_eq!(reloaded.profile_activation_token, None);
    assert_eq!(reloaded.profile_about.as_deref(), Some("updated about"));
    assert_eq!(reloaded.profile_image_url, None);
}

#[test]
#[ignore = "requires a live PostgreSQL database via DATABASE_URL"]
fn reply_tree_listings_and_cascade_delete() {
    let mut conn = connection();
    let alice = insert_test_profile(&mut conn, &format!("alice-{}", tag()));

    insert_test_thread(&mut conn, alice.profile_id, None, "root post");
    let top_level = select_threads_by_thread_profile_id(&mut conn, alice.profile_id).unwrap();
    assert_eq!(top_level.len(), 1);
    let root = top_level[0].clone();
    assert!(root.is_top_level());

    insert_test_thread(&mut conn, alice.profile_id, Some(root.thread_id), "reply");
    let reply = select_all_reply_threads_by_thread_id(&mut conn, root.thread_id)
        .unwrap()
        .into_iter()
        .find(|t| t.thread_reply_thread_id == Some(root.thread_id))
        .expect("reply is in the tree");
    insert_test_thread(&mut conn, alice.profile_id, Some(reply.thread_id), "nested");

    // Top-level listings exclude replies at any depth
    let by_name = select_threads_by_profile_name(&mut conn, &alice.profile_name).unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].thread_id, root.thread_id);

    // The tree holds the root plus both descendants
    let tree = select_all_reply_threads_by_thread_id(&mut conn, root.thread_id).unwrap();
    assert_eq!(tree.len(), 3);
    assert!(tree.iter().any(|t| t.thread_id == root.thread_id));
    assert!(tree.iter().any(|t| t.thread_reply_thread_id == Some(reply.thread_id)));

    // Deleting the root cascades through the descendants
    let message = delete_thread_by_thread_id(&mut conn, root.thread_id).unwrap();
    assert_eq!(message, "Thread successfully deleted");
    assert_eq!(
        select_thread_by_thread_id(&mut conn, root.thread_id).unwrap(),
        None
    );
    assert_eq!(
        select_thread_by_thread_id(&mut conn, reply.thread_id).unwrap(),
        None
    );
}

#[test]
#[ignore = "requires a live PostgreSQL database via DATABASE_URL"]
fn delete_confirms_even_when_nothing_existed() {
    let mut conn = connection();
    let message = delete_thread_by_thread_id(&mut conn, Uuid::new_v4()).unwrap();
    assert_eq!(message, "Thread successfully deleted");
}

#[test]
#[ignore = "requires a live PostgreSQL database via DATABASE_URL"]
fn listings_order_newest_first_and_pages_stay_within_size() {
    let mut conn = connection();
    let author = insert_test_profile(&mut conn, &format!("gina-{}", tag()));
    for i in 0..25 {
        insert_test_thread(&mut conn, author.profile_id, None, &format!("post {i}"));
    }

    let all = select_all_threads(&mut conn).unwrap();
    assert!(
        all.windows(2)
            .all(|pair| pair[0].thread_datetime >= pair[1].thread_datetime)
    );

    let page_one = select_page_of_threads(&mut conn, ThreadPage::new(1).unwrap()).unwrap();
    let page_two = select_page_of_threads(&mut conn, ThreadPage::new(2).unwrap()).unwrap();
    assert_eq!(page_one.len(), 10);
    assert_eq!(page_two.len(), 10);
    assert!(page_one.iter().all(|t| t.is_top_level()));
    assert!(page_two.iter().all(|t| t.is_top_level()));

    let mine = select_threads_by_thread_profile_id(&mut conn, author.profile_id).unwrap();
    assert_eq!(mine.len(), 25);
}
