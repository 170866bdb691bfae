use axum::{response::Html, routing::get, Router};

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Docchat - Chat with your PDF</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; max-width: 720px; }
    h1 { margin-bottom: 0.5rem; }
    .card { border: 1px solid #ddd; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }
    input, textarea { width: 100%; padding: 0.5rem; box-sizing: border-box; }
    button { margin-top: 0.75rem; padding: 0.6rem 1rem; }
    #messages { background: #f6f8fa; padding: 1rem; min-height: 8rem; overflow: auto; white-space: pre-wrap; }
    .me { font-weight: 600; }
  </style>
</head>
<body>
  <h1>Docchat</h1>
  <p>Upload a PDF, then ask questions about it.</p>

  <div class="card">
    <h2>1) Upload PDF</h2>
    <input id="fileInput" type="file" accept="application/pdf" />
    <button id="uploadBtn">Upload</button>
    <pre id="uploadStatus"></pre>
  </div>

  <div class="card">
    <h2>2) Chat</h2>
    <div id="messages"></div>
    <input id="messageInput" placeholder="Ask something about the document" />
    <button id="sendBtn">Send</button>
  </div>

  <script>
    const uploadBtn = document.getElementById('uploadBtn');
    const sendBtn = document.getElementById('sendBtn');
    const messages = document.getElementById('messages');
    const uploadStatus = document.getElementById('uploadStatus');

    uploadBtn.addEventListener('click', async () => {
      const fileInput = document.getElementById('fileInput');
      if (!fileInput.files.length) {
        uploadStatus.textContent = 'Select a file first.';
        return;
      }
      const formData = new FormData();
      formData.append('file', fileInput.files[0]);
      uploadStatus.textContent = 'Uploading...';
      const res = await fetch('/upload', { method: 'POST', body: formData });
      const json = await res.json();
      uploadStatus.textContent = json.error ? json.error : json.message + '\n\n' + json.text;
    });

    sendBtn.addEventListener('click', async () => {
      const input = document.getElementById('messageInput');
      const message = input.value.trim();
      if (!message) return;
      messages.textContent += 'You: ' + message + '\n';
      input.value = '';
      const res = await fetch('/chat', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ message })
      });
      const json = await res.json();
      messages.textContent += 'Bot: ' + (json.error ? json.error : json.reply) + '\n';
      messages.scrollTop = messages.scrollHeight;
    });
  </script>
</body>
</html>"#)
}
