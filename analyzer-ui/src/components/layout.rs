use super::{Flash, FlashMessages};
use leptos::prelude::*;

/// Document shell shared by every page: head, nav bar, flashes and footer.
#[component]
pub fn Layout(
    #[prop(into)] title: String,
    flashes: Vec<Flash>,
    children: Children,
) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔎</text></svg>"/>
                <style>{CSS}</style>
            </head>
            <body>
                <header class="nav">
                    <div class="container nav__inner">
                        <a href="/" class="nav__brand">"Page Analyzer"</a>
                        <nav class="nav__links">
                            <a href="/">"Home"</a>
                            <a href="/urls">"Sites"</a>
                        </nav>
                    </div>
                </header>
                <main class="container">
                    <FlashMessages flashes=flashes/>
                    {children()}
                </main>
                <footer class="footer">"Page Analyzer"</footer>
            </body>
        </html>
    }
}

const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --pine: #286983;
    --foam: #56949f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
a { color: var(--pine); }
.container { max-width: 960px; margin: 0 auto; padding: 1.5rem; }
.nav { background: var(--surface); border-bottom: 2px solid var(--overlay); }
.nav__inner { display: flex; align-items: center; justify-content: space-between; padding-top: 1rem; padding-bottom: 1rem; }
.nav__brand { font-weight: 800; color: var(--love); text-decoration: none; font-size: 1.2rem; }
.nav__links a { margin-left: 1rem; text-decoration: none; font-weight: 600; }
.hero { text-align: center; padding: 3rem 0 2rem; }
.hero__title { font-size: clamp(2rem, 5vw, 3rem); color: var(--love); font-weight: 800; margin-bottom: 0.75rem; }
.hero__subtitle { color: var(--subtle); font-size: 1.1rem; max-width: 520px; margin: 0 auto; }
.url-form { display: flex; flex-direction: column; gap: 1rem; margin: 2rem 0; }
@media (min-width: 640px) { .url-form { flex-direction: row; } }
.url-form__input {
    flex: 1; padding: 1rem 1.25rem; border: 2px solid var(--overlay);
    border-radius: 8px; background: var(--surface); color: var(--text); font-size: 1rem;
}
.url-form__input:focus { outline: none; border-color: var(--pine); }
.url-form__input--invalid { border-color: var(--love); }
.url-form__button, .check-form__button {
    padding: 1rem 2rem; background: var(--love); color: var(--base);
    border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer;
}
.url-form__button:hover, .check-form__button:hover { opacity: 0.9; }
.flash { border-radius: 8px; padding: 1rem 1.25rem; margin: 1rem 0; border: 2px solid; }
.flash--success { background: #e6f2ee; border-color: var(--foam); color: var(--pine); }
.flash--info { background: #fdf1e0; border-color: var(--gold); color: #8a5a17; }
.flash--danger { background: #fce8ec; border-color: var(--love); color: #8b3d4d; }
.page-title { color: var(--love); font-size: 1.6rem; margin: 1.5rem 0 1rem; }
.section-title { color: var(--pine); font-size: 1.2rem; margin: 2rem 0 1rem; }
.table { width: 100%; border-collapse: collapse; background: var(--surface); border: 2px solid var(--overlay); border-radius: 8px; }
.table th, .table td { text-align: left; padding: 0.6rem 0.8rem; border-bottom: 1px solid var(--overlay); vertical-align: top; word-break: break-word; }
.table th { color: var(--subtle); font-weight: 600; }
.empty { color: var(--muted); font-style: italic; margin: 1rem 0; }
.error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1.25rem; margin: 2rem 0; }
.error__title { color: var(--love); font-weight: 700; margin-bottom: 0.5rem; }
.error__message { color: #8b3d4d; }
.footer { text-align: center; padding: 2rem 0; color: var(--muted); font-size: 0.9rem; border-top: 1px solid var(--overlay); margin-top: 3rem; }
"#;
