use axum::{extract::State, response::Html};

use crate::{AppState, error::AppError, store::UserRecord};

#[axum::debug_handler]
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let logo = match &state.config.brand_logo_url {
        Some(url) => format!(r#"<img src="{}" alt="logo" height="48"><br>"#, escape(url)),
        None => String::new(),
    };
    Html(format!(
        r#"{logo}<h2>User Registry</h2>
<p>Env: {env}</p>
<p>Instance: {instance}</p>
<a href="/form">Formulario</a>
"#,
        env = escape(&state.config.app_env),
        instance = escape(&state.config.instance_id),
    ))
}

#[axum::debug_handler]
pub async fn form() -> Html<&'static str> {
    Html(
        r#"<h2>Nuevo usuario</h2>
<form method="POST" action="/submit">
  Nombre: <input name="name"><br>
  Apellido: <input name="surname"><br>
  Edad: <input name="age"><br>
  <button type="submit">Enviar</button>
</form>
<a href="/">Volver</a>
"#,
    )
}

#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (rows, source) = state.listing.list_recent().await?;
    Ok(Html(render_list(
        &state.config.instance_id,
        source.as_str(),
        &rows,
    )))
}

fn render_list(instance: &str, data_source: &str, rows: &[UserRecord]) -> String {
    let mut table = String::from("<tr><th>ID</th><th>Nombre</th><th>Apellido</th><th>Edad</th></tr>\n");
    for row in rows {
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row.id,
            escape(&row.name),
            escape(&row.surname),
            row.age,
        ));
    }

    format!(
        r#"<h2>Usuarios (Instancia {instance})</h2>
<p>Fuente: {data_source}</p>
<table border="1">
{table}</table>
<a href="/">Volver</a>
"#,
        instance = escape(instance),
    )
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
