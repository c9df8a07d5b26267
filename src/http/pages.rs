use crate::config::structs::configuration::Configuration;

const STYLE: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Segoe UI', Arial, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            color: #333;
        }
        .container { max-width: 1000px; margin: 0 auto; padding: 20px; }
        .hero {
            background: rgba(255,255,255,0.95);
            padding: 50px 40px;
            border-radius: 20px;
            text-align: center;
            box-shadow: 0 20px 40px rgba(0,0,0,0.1);
            margin-bottom: 30px;
        }
        .hero h1 { font-size: 2.5em; color: #2c3e50; margin-bottom: 10px; }
        .hero h2 { font-size: 1.4em; color: #3498db; margin-bottom: 20px; }
        .quote {
            font-style: italic;
            color: #e74c3c;
            margin: 20px 0;
            padding: 15px;
            background: #f8f9fa;
            border-radius: 10px;
        }
        .btn {
            background: #3498db;
            color: white;
            padding: 12px 25px;
            text-decoration: none;
            border-radius: 25px;
            margin: 8px;
            display: inline-block;
        }
        .section {
            background: rgba(255,255,255,0.95);
            padding: 30px;
            border-radius: 15px;
            margin: 20px 0;
            box-shadow: 0 10px 30px rgba(0,0,0,0.1);
        }
        .section h2 { color: #2c3e50; margin-bottom: 20px; }
        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
            gap: 20px;
        }
        .card {
            background: #f8f9fa;
            padding: 20px;
            border-radius: 10px;
            border-left: 4px solid #3498db;
        }
        .card h3 { color: #2c3e50; margin-bottom: 10px; }
        .tag {
            background: #3498db;
            color: white;
            padding: 4px 12px;
            border-radius: 20px;
            font-size: 0.85em;
            margin: 2px;
            display: inline-block;
        }
        .contact-info {
            background: linear-gradient(45deg, #16a085, #27ae60);
            color: white;
            padding: 30px;
            border-radius: 15px;
            text-align: center;
        }
        .contact-info a { color: white; }
        form label { display: block; margin: 12px 0 4px 0; font-weight: bold; }
        form input, form textarea {
            width: 100%;
            padding: 10px;
            border: 1px solid #ccc;
            border-radius: 8px;
        }
        form button { margin-top: 15px; border: none; cursor: pointer; font-size: 1em; }
"#;

pub fn render_index(config: &Configuration) -> String
{
    let profile = &config.profile;

    let mut skills = String::new();
    for group in &config.skills {
        let items = group.items
            .iter()
            .map(|item| format!("<span class=\"tag\">{item}</span>"))
            .collect::<Vec<String>>()
            .join("\n                        ");
        skills.push_str(&format!(
            r#"                    <div class="card">
                        <h3>{}</h3>
                        {}
                    </div>
"#,
            group.category, items
        ));
    }

    let mut projects = String::new();
    for project in &config.projects {
        let technologies = project.technologies
            .iter()
            .map(|tech| format!("<span class=\"tag\">{tech}</span>"))
            .collect::<Vec<String>>()
            .join("\n                        ");
        projects.push_str(&format!(
            r#"                    <div class="card">
                        <h3>{}</h3>
                        <p>{}</p>
                        {}
                        <p><a href="{}" target="_blank">View on GitHub</a> ({})</p>
                    </div>
"#,
            project.name, project.description, technologies, project.github, project.status
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{owner} - Portfolio</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
        <div class="hero">
            <h1>{owner}</h1>
            <h2>{role}</h2>
            <p><strong>{education}</strong> | {location}</p>
            <div class="quote">"{tagline}"</div>
            <a href="{github}" target="_blank" class="btn">GitHub Profile</a>
            <a href="mailto:{email}" class="btn">Email</a>
            <a href="/contact" class="btn">Contact Form</a>
            <a href="/health" class="btn">Health Check</a>
            <a href="/api/stats" class="btn">API Stats</a>
        </div>

        <div class="section">
            <h2>Technical Skills</h2>
            <div class="grid">
{skills}            </div>
        </div>

        <div class="section">
            <h2>Projects</h2>
            <div class="grid">
{projects}            </div>
        </div>

        <div class="contact-info">
            <h2>Contact</h2>
            <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
            <p><strong>Location:</strong> {location}</p>
            <p><strong>GitHub:</strong> <a href="{github}" target="_blank">{github}</a></p>
            <p><strong>Education:</strong> {education}</p>
        </div>
    </div>
</body>
</html>
"#,
        owner = profile.owner,
        role = profile.role,
        education = profile.education,
        location = profile.location,
        tagline = profile.tagline,
        github = profile.github,
        email = profile.email,
    )
}

pub fn render_contact(config: &Configuration) -> String
{
    let profile = &config.profile;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Contact - {owner}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
        <div class="section">
            <h2>Contact {owner}</h2>
            <form id="contact-form">
                <label for="name">Name</label>
                <input type="text" id="name" name="name" required>
                <label for="email">Email</label>
                <input type="email" id="email" name="email" required>
                <label for="message">Message</label>
                <textarea id="message" name="message" rows="6" required></textarea>
                <button type="submit" class="btn">Send</button>
            </form>
            <p id="result"></p>
            <p><a href="/">Back to portfolio</a></p>
        </div>
    </div>
    <script>
        document.getElementById('contact-form').addEventListener('submit', function(event) {{
            event.preventDefault();
            const payload = {{
                name: document.getElementById('name').value,
                email: document.getElementById('email').value,
                message: document.getElementById('message').value
            }};
            fetch('/api/contact', {{
                method: 'POST',
                headers: {{ 'Content-Type': 'application/json' }},
                body: JSON.stringify(payload)
            }})
                .then(res => res.json())
                .then(data => {{
                    document.getElementById('result').textContent =
                        data.error ? 'Error: ' + data.error : 'Thank you, your message was sent.';
                }});
        }});
    </script>
</body>
</html>
"#,
        owner = profile.owner,
    )
}
