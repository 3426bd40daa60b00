//! Embedded browser assets for the editor page.
//!
//! The presentation layer is two static strings: the page markup and its
//! stylesheet. The page drives the pipeline through the form endpoints
//! and hands validated XML to an embedded diagrams.net viewer frame.

/// The single-page editor served at `/`.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>drafter</title>
  <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
  <div class="app-container">
    <aside class="sidebar">
      <div class="sidebar-header">
        <div class="brand"><span class="dot"></span>drafter</div>
      </div>
      <div class="sidebar-content">
        <div class="step">
          <label for="instruction">1. Describe your flowchart</label>
          <textarea id="instruction" rows="4" placeholder="e.g. user login flow"></textarea>
        </div>
        <div class="step">
          <label for="plan">2. Review the plan</label>
          <textarea id="plan" class="mono" rows="10"></textarea>
        </div>
        <div class="step btn-group">
          <button id="btn-plan" class="btn btn-primary">Generate plan</button>
          <button id="btn-xml" class="btn btn-secondary" disabled>Render diagram</button>
          <button id="btn-download" class="btn btn-success" disabled>Download</button>
        </div>
      </div>
      <div id="status" class="status-bar">Ready.</div>
    </aside>
    <main class="main-view">
      <iframe id="drawio-frame"
              src="https://embed.diagrams.net/?embed=1&ui=atlas&spin=1&proto=json"></iframe>
      <div id="overlay" class="overlay"><div class="spinner"></div></div>
    </main>
  </div>
  <script>
    const frame = document.getElementById('drawio-frame');
    const overlay = document.getElementById('overlay');
    const status = document.getElementById('status');
    let currentXml = null;
    let frameReady = false;

    function setStatus(text) { status.textContent = text; }
    function setBusy(busy) { overlay.classList.toggle('active', busy); }

    async function postForm(url, fields) {
      const body = new URLSearchParams(fields);
      const resp = await fetch(url, { method: 'POST', body });
      const data = await resp.json();
      if (!resp.ok) throw new Error(data.error || 'request failed');
      return data;
    }

    window.addEventListener('message', (evt) => {
      let msg;
      try { msg = JSON.parse(evt.data); } catch { return; }
      if (msg.event === 'init') {
        frameReady = true;
        if (currentXml) loadXml(currentXml);
      }
    });

    function loadXml(xml) {
      if (!frameReady) return;
      frame.contentWindow.postMessage(
        JSON.stringify({ action: 'load', xml, autosave: 0 }), '*');
    }

    document.getElementById('btn-plan').addEventListener('click', async () => {
      const instruction = document.getElementById('instruction').value;
      setBusy(true); setStatus('Generating plan...');
      try {
        const data = await postForm('/api/plan', { instruction });
        document.getElementById('plan').value = data.plan;
        document.getElementById('btn-xml').disabled = false;
        setStatus('Plan ready. Edit it if you like, then render.');
      } catch (err) {
        setStatus('Error: ' + err.message);
      } finally { setBusy(false); }
    });

    document.getElementById('btn-xml').addEventListener('click', async () => {
      const plan = document.getElementById('plan').value;
      setBusy(true); setStatus('Rendering diagram...');
      try {
        const data = await postForm('/api/xml', { plan });
        currentXml = data.xml;
        loadXml(currentXml);
        document.getElementById('btn-download').disabled = false;
        setStatus('Diagram ready.');
      } catch (err) {
        setStatus('Error: ' + err.message);
      } finally { setBusy(false); }
    });

    document.getElementById('btn-download').addEventListener('click', () => {
      if (!currentXml) return;
      const form = document.createElement('form');
      form.method = 'POST';
      form.action = '/download';
      const field = document.createElement('input');
      field.type = 'hidden';
      field.name = 'xml';
      field.value = currentXml;
      form.appendChild(field);
      document.body.appendChild(form);
      form.submit();
      form.remove();
    });
  </script>
</body>
</html>
"#;

/// The stylesheet served at `/static/css/main.css`.
pub const MAIN_CSS: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }
.app-container { display: flex; height: 100vh; }
.sidebar { width: 350px; background: #f7f8fa; border-right: 1px solid #e0e0e0; display: flex; flex-direction: column; }
.sidebar-header { padding: 20px; border-bottom: 1px solid #e0e0e0; }
.brand { font-size: 18px; font-weight: 600; display: flex; align-items: center; }
.dot { width: 10px; height: 10px; background: #10b981; border-radius: 50%; margin-right: 8px; }
.sidebar-content { flex: 1; padding: 20px; overflow-y: auto; }
.step { margin-bottom: 25px; }
.step label { display: block; margin-bottom: 8px; font-weight: 500; color: #374151; }
textarea { width: 100%; padding: 10px; border: 1px solid #d1d5db; border-radius: 6px; font-size: 14px; resize: vertical; }
.mono { font-family: 'Courier New', monospace; font-size: 12px; }
.btn-group { display: flex; gap: 10px; }
.btn { padding: 10px 16px; border: none; border-radius: 6px; font-size: 14px; font-weight: 500; cursor: pointer; transition: all 0.2s; }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: #3b82f6; color: white; }
.btn-primary:hover:not(:disabled) { background: #2563eb; }
.btn-secondary { background: #6b7280; color: white; }
.btn-secondary:hover:not(:disabled) { background: #4b5563; }
.btn-success { background: #10b981; color: white; }
.btn-success:hover:not(:disabled) { background: #059669; }
.status-bar { padding: 12px 20px; background: #1f2937; color: white; font-size: 13px; }
.main-view { flex: 1; position: relative; background: #fff; }
#drawio-frame { width: 100%; height: 100%; border: none; }
.overlay { position: absolute; top: 0; left: 0; right: 0; bottom: 0; background: rgba(255,255,255,0.9); display: none; align-items: center; justify-content: center; z-index: 100; }
.overlay.active { display: flex; }
.spinner { width: 40px; height: 40px; border: 4px solid #f3f4f6; border-top-color: #3b82f6; border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;
