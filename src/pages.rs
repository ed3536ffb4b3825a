//! Server-rendered HTML pages
//!
//! Thin page shells over the JSON API: the markup carries no data, the
//! scripts under /static fetch everything from /api/members. Validation
//! lives in the service layer only; these pages never duplicate it.

use axum::extract::Path;
use axum::response::Html;

/// GET / - Member list page
pub async fn index() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Member Registry</title>
  <link href="/static/style.css" rel="stylesheet" />
</head>
<body>
  <div>
    <h1>Member Registry</h1>
    <div class="actions">
      <a href="/new" class="btn btn-primary">New member</a>
    </div>
    <div id="member-list">
      <p>Loading...</p>
    </div>
  </div>
  <script src="/static/app.js"></script>
</body>
</html>
"#,
    )
}

/// GET /new - Member creation form
pub async fn new_member() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>New Member</title>
  <link href="/static/style.css" rel="stylesheet" />
</head>
<body>
  <div>
    <h1>New Member</h1>
    <form id="member-form">
      <div class="form-group">
        <label for="member_no">Member No:</label>
        <input type="text" id="member_no" name="member_no" required />
      </div>
      <div class="form-group">
        <label for="name">Name:</label>
        <input type="text" id="name" name="name" required />
      </div>
      <div class="form-actions">
        <button type="submit" class="btn btn-primary">Create</button>
        <a href="/" class="btn btn-secondary">Cancel</a>
      </div>
    </form>
  </div>
  <script src="/static/new.js"></script>
</body>
</html>
"#,
    )
}

/// GET /edit/:id - Member edit form
///
/// The id lands in a data attribute; edit.js reads it and fetches the
/// current record from the API.
pub async fn edit_member(Path(id): Path<i64>) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Edit Member</title>
  <link href="/static/style.css" rel="stylesheet" />
</head>
<body>
  <div>
    <h1>Edit Member</h1>
    <form id="member-form" data-member-id="{id}">
      <div class="form-group">
        <label for="member_no">Member No:</label>
        <input type="text" id="member_no" name="member_no" required />
      </div>
      <div class="form-group">
        <label for="name">Name:</label>
        <input type="text" id="name" name="name" required />
      </div>
      <div class="form-actions">
        <button type="submit" class="btn btn-primary">Update</button>
        <a href="/" class="btn btn-secondary">Cancel</a>
      </div>
    </form>
  </div>
  <script src="/static/edit.js"></script>
</body>
</html>
"#
    ))
}
