use axum::response::Html;

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Resume Screening</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
  .columns { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
  textarea { width: 100%; min-height: 12rem; }
  label { display: block; font-weight: 600; margin: 1rem 0 0.4rem; }
  button { margin-top: 1.5rem; padding: 0.6rem 1.4rem; }
</style>
</head>
<body>
<h1>Resume Screening</h1>
<p>Upload a job description and one or more resumes (PDF / DOCX / TXT / text) to get a ranked screening report.</p>
<form method="post" action="/api/v1/screenings/download" enctype="multipart/form-data">
  <h2>Job Description</h2>
  <div class="columns">
    <div>
      <label for="jd_text">Paste job description (optional if you upload a file)</label>
      <textarea id="jd_text" name="jd_text" placeholder="Python backend engineer with Django, REST APIs, PostgreSQL..."></textarea>
    </div>
    <div>
      <label for="jd_file">Or upload it as PDF / DOCX / TXT</label>
      <input id="jd_file" name="jd_file" type="file" accept=".pdf,.docx,.txt,.doc">
    </div>
  </div>
  <h2>Candidate Resumes</h2>
  <label for="resumes">Upload one or more resumes</label>
  <input id="resumes" name="resumes" type="file" accept=".pdf,.docx,.txt,.doc" multiple>
  <label for="resumes_text">Optional: paste resumes as text (separate candidates with a line like '---')</label>
  <textarea id="resumes_text" name="resumes_text" placeholder="Candidate A...&#10;...&#10;---&#10;Candidate B..."></textarea>
  <button type="submit">Screen candidates and download report</button>
</form>
</body>
</html>
"#;

/// GET /
/// Upload form posting to the report download endpoint.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
