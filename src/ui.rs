use crate::models::DashboardSnapshot;

pub fn render_index(snapshot: &DashboardSnapshot) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", &snapshot.today)
        .replace("{{SELECTED}}", &snapshot.selected_date)
        .replace("{{STEPS}}", &snapshot.entry.steps)
        .replace("{{RUNNING}}", &snapshot.entry.running)
        .replace("{{SLEEP}}", &snapshot.entry.sleep)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Healthabit Analytics Dashboard</title>
  <style>
    :root {
      --bg-1: #111827;
      --bg-2: #1e3a8a;
      --card: #1f2937;
      --field: #374151;
      --ink: #f9fafb;
      --muted: #9ca3af;
      --accent: #3b82f6;
      --accent-dark: #2563eb;
      --idle: #4b5563;
      --go: #16a34a;
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.35);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(90deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 32px 18px 48px;
    }

    h2.title {
      text-align: center;
      font-size: clamp(1.5rem, 3vw, 1.9rem);
      margin: 0 0 24px;
    }

    .app {
      width: min(900px, 100%);
      margin: 0 auto;
      background: var(--card);
      border-radius: 12px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 24px;
    }

    .row {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 14px;
    }

    label {
      display: block;
      font-size: 0.875rem;
      font-weight: 500;
      margin-bottom: 8px;
    }

    input {
      width: 100%;
      padding: 8px;
      border: none;
      border-radius: 6px;
      background: var(--field);
      color: var(--ink);
      font-size: 1rem;
    }

    input:focus {
      outline: 2px solid var(--accent);
    }

    input:disabled {
      opacity: 0.6;
    }

    .fields {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 8px;
      padding: 9px 22px;
      font-size: 1rem;
      font-weight: 700;
      color: white;
      cursor: pointer;
      background: var(--idle);
      transition: background 200ms ease, transform 150ms ease;
    }

    button.active {
      background: var(--accent-dark);
    }

    button:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    #edit-btn {
      background: var(--go);
    }

    #edit-btn:hover {
      transform: scale(1.05);
    }

    #suggest-btn {
      background: var(--accent);
    }

    .panel {
      background: var(--field);
      border-radius: 10px;
      padding: 18px;
    }

    .panel h3 {
      margin: 0 0 14px;
      font-size: 1.2rem;
    }

    .hidden {
      display: none;
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: #3b82f6;
      stroke-width: 3;
    }

    .chart-fill {
      fill: rgba(59, 130, 246, 0.18);
    }

    .chart-point {
      fill: rgba(59, 130, 246, 0.5);
      stroke: #3b82f6;
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(249, 250, 251, 0.12);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .spinner {
      width: 32px;
      height: 32px;
      margin: 16px auto 0;
      border-radius: 50%;
      border-bottom: 2px solid white;
      animation: spin 1s linear infinite;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
      text-align: center;
    }

    .status[data-type="error"] {
      color: #f87171;
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 20px 16px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <h2 class="title">Healthabit Analytics Dashboard</h2>

  <main class="app">
    <section class="row">
      <button type="button" class="view-btn active" data-view="analytics">Analytics</button>
      <button type="button" class="view-btn" data-view="suggestions">Suggestions</button>
    </section>

    <section>
      <label for="date">Select Date</label>
      <input id="date" type="date" value="{{SELECTED}}" max="{{TODAY}}" />
    </section>

    <section class="fields">
      <div>
        <label for="steps">Steps</label>
        <input id="steps" class="metric" data-field="steps" type="number" placeholder="Steps" value="{{STEPS}}" disabled />
      </div>
      <div>
        <label for="running">Running (km)</label>
        <input id="running" class="metric" data-field="running" type="number" placeholder="Running (km)" value="{{RUNNING}}" disabled />
      </div>
      <div>
        <label for="sleep">Sleep (hours)</label>
        <input id="sleep" class="metric" data-field="sleep" type="number" placeholder="Sleep (hours)" value="{{SLEEP}}" disabled />
      </div>
    </section>

    <section class="row">
      <button type="button" id="edit-btn">Edit Data</button>
    </section>

    <section class="row">
      <button type="button" class="view-btn" data-view="steps">Steps Graph</button>
      <button type="button" class="view-btn" data-view="running">Running Graph</button>
      <button type="button" class="view-btn" data-view="sleep">Sleep Graph</button>
    </section>

    <section id="chart-panel" class="panel hidden">
      <h3 id="chart-title">Step Count Graph</h3>
      <svg id="chart" viewBox="0 0 600 260" aria-label="Metric chart" role="img"></svg>
    </section>

    <section id="suggestion-panel" class="hidden">
      <button type="button" id="suggest-btn">Get Suggestion</button>
      <div id="spinner" class="spinner hidden"></div>
      <div id="suggestion-card" class="panel hidden">
        <h3>Suggestion:</h3>
        <div id="suggestion"></div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const dateEl = document.getElementById('date');
    const editBtn = document.getElementById('edit-btn');
    const statusEl = document.getElementById('status');
    const chartPanel = document.getElementById('chart-panel');
    const chartTitleEl = document.getElementById('chart-title');
    const chartEl = document.getElementById('chart');
    const suggestionPanel = document.getElementById('suggestion-panel');
    const suggestBtn = document.getElementById('suggest-btn');
    const spinnerEl = document.getElementById('spinner');
    const suggestionCard = document.getElementById('suggestion-card');
    const suggestionEl = document.getElementById('suggestion');
    const metricInputs = Array.from(document.querySelectorAll('.metric'));
    const viewButtons = Array.from(document.querySelectorAll('.view-btn'));

    const chartTitles = {
      steps: 'Step Count Graph',
      running: 'Running Graph',
      sleep: 'Sleep Graph'
    };

    let snapshot = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    // 422 answers are user-facing refusals and get an alert; anything else
    // lands in the status line.
    const request = async (method, url, body) => {
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['content-type'] = 'application/json';
        options.body = JSON.stringify(body);
      }
      const res = await fetch(url, options);
      if (!res.ok) {
        const message = (await res.text()) || 'Request failed';
        if (res.status === 422) {
          alert(message);
        } else {
          setStatus(message, 'error');
        }
        return null;
      }
      setStatus('', '');
      return res.json();
    };

    const renderEntry = (entry) => {
      metricInputs.forEach((input) => {
        if (document.activeElement !== input) {
          input.value = entry[input.dataset.field];
        }
      });
    };

    const render = (next) => {
      snapshot = next;
      dateEl.max = next.today;
      dateEl.value = next.selected_date;
      renderEntry(next.entry);
      metricInputs.forEach((input) => {
        input.disabled = !next.edit_mode || next.selected_date > next.today;
      });
      editBtn.textContent = next.edit_mode ? 'Save Data' : 'Edit Data';
      viewButtons.forEach((button) => {
        button.classList.toggle('active', button.dataset.view === next.active_view);
      });

      const charted = chartTitles[next.active_view];
      chartPanel.classList.toggle('hidden', !charted);
      suggestionPanel.classList.toggle('hidden', next.active_view !== 'suggestions');
      if (charted) {
        chartTitleEl.textContent = charted;
        loadChart(next.active_view).catch((err) => setStatus(err.message, 'error'));
      }
      renderSuggestion(next.loading, next.suggestion);
    };

    const renderSuggestion = (loading, html) => {
      suggestBtn.disabled = loading;
      suggestBtn.textContent = loading ? 'Fetching...' : 'Get Suggestion';
      spinnerEl.classList.toggle('hidden', !loading);
      suggestionCard.classList.toggle('hidden', loading || !html);
      suggestionEl.innerHTML = html;
    };

    const formatAxisValue = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1);
    };

    const renderLineChart = (points) => {
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 48;
      const paddingY = 34;
      const top = 24;

      const values = points.map((point) => point.value);
      let min = Math.min(...values, 0);
      let max = Math.max(...values, 0);
      if (min === max) {
        max += 1;
      }

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');
      const fill = `${path} L ${x(points.length - 1).toFixed(2)} ${y(min)} L ${x(0).toFixed(2)} ${y(min)} Z`;

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${formatAxisValue(value)}</text>`;
      }

      const labelEvery = Math.max(1, Math.ceil(points.length / 8));
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="4" />`)
        .join('');

      chartEl.innerHTML = `
        ${grid}
        <path class="chart-fill" d="${fill}" />
        <path class="chart-line" d="${path}" />
        ${circles}
        ${xLabels}
      `;
    };

    const loadChart = async (metric) => {
      const series = await request('GET', `/api/chart/${metric}`);
      if (!series) {
        return;
      }
      const [dataset] = series.datasets;
      renderLineChart(series.labels.map((label, index) => ({
        label: label.slice(5),
        value: dataset.data[index]
      })));
    };

    const refresh = async () => {
      const next = await request('GET', '/api/dashboard');
      if (next) {
        render(next);
      }
    };

    dateEl.addEventListener('change', async () => {
      const next = await request('POST', '/api/date', { date: dateEl.value });
      if (next) {
        render(next);
      } else if (snapshot) {
        dateEl.value = snapshot.selected_date;
      }
    });

    metricInputs.forEach((input) => {
      input.addEventListener('input', async () => {
        const entry = await request('POST', '/api/entry', {
          field: input.dataset.field,
          value: input.value
        });
        if (entry) {
          snapshot.entry = entry;
          if (chartTitles[snapshot.active_view]) {
            loadChart(snapshot.active_view).catch((err) => setStatus(err.message, 'error'));
          }
        } else {
          refresh().catch((err) => setStatus(err.message, 'error'));
        }
      });
    });

    editBtn.addEventListener('click', async () => {
      const next = await request('POST', '/api/edit');
      if (next) {
        render(next);
      }
    });

    viewButtons.forEach((button) => {
      button.addEventListener('click', async () => {
        const next = await request('POST', '/api/view', { view: button.dataset.view });
        if (next) {
          render(next);
        }
      });
    });

    suggestBtn.addEventListener('click', async () => {
      renderSuggestion(true, '');
      const result = await request('POST', '/api/suggestion');
      if (result) {
        renderSuggestion(false, result.suggestion);
      } else {
        refresh().catch((err) => setStatus(err.message, 'error'));
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
