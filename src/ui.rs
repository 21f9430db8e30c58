pub fn render_index(week: &str) -> String {
    INDEX_HTML.replace("{{WEEK}}", week)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Voice Analytics</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600;700&display=swap');

    :root {
      --bg: #0b0e17;
      --card: #121624;
      --border: rgba(148, 163, 196, 0.16);
      --ink: #e7e9f2;
      --muted: #8a91a8;
      --primary: #7c5cff;
      --primary-soft: rgba(124, 92, 255, 0.12);
      --chart-2: #22d3ee;
      --chart-3: #34d399;
      --chart-4: #fbbf24;
      --destructive: #f87171;
      --shadow: 0 18px 48px rgba(4, 6, 12, 0.55);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at 20% -10%, rgba(124, 92, 255, 0.18), transparent 45%),
        var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 0 0 64px;
    }

    header.top {
      position: sticky;
      top: 0;
      z-index: 20;
      backdrop-filter: blur(10px);
      background: rgba(11, 14, 23, 0.82);
      border-bottom: 1px solid var(--border);
    }

    .top-inner {
      width: min(1120px, 100%);
      margin: 0 auto;
      padding: 14px 20px;
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .brand {
      display: flex;
      align-items: center;
      gap: 10px;
      font-weight: 700;
      font-size: 1.1rem;
    }

    .brand .mark {
      width: 32px;
      height: 32px;
      border-radius: 9px;
      background: var(--primary);
      display: grid;
      place-items: center;
      font-size: 1rem;
    }

    main {
      width: min(1120px, 100%);
      margin: 0 auto;
      padding: 40px 20px 0;
      display: grid;
      gap: 28px;
    }

    .hero h2 {
      margin: 0 0 10px;
      font-size: clamp(2rem, 4vw, 2.9rem);
    }

    .hero h2 span {
      background: linear-gradient(120deg, var(--primary), var(--chart-2));
      -webkit-background-clip: text;
      background-clip: text;
      color: transparent;
    }

    .hero p {
      margin: 0;
      color: var(--muted);
      max-width: 600px;
      font-size: 1.05rem;
    }

    .stat-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 18px;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 20px;
    }

    .stat .label {
      color: var(--muted);
      font-size: 0.85rem;
      margin: 0 0 6px;
    }

    .stat .value {
      font-size: 1.9rem;
      font-weight: 700;
      margin: 0 0 4px;
    }

    .stat .change {
      color: var(--primary);
      font-size: 0.9rem;
      margin: 0;
    }

    .chart-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(380px, 1fr));
      gap: 18px;
    }

    .chart-card h3 {
      margin: 0 0 4px;
      font-size: 1.15rem;
    }

    .chart-card .subtitle {
      margin: 0 0 14px;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .chart-card.wide {
      grid-column: 1 / -1;
    }

    .chart-head {
      display: flex;
      align-items: flex-start;
      justify-content: space-between;
      gap: 14px;
    }

    svg.chart {
      width: 100%;
      height: 280px;
      display: block;
    }

    svg.chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-grid-line {
      stroke: rgba(148, 163, 196, 0.14);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .chart-line {
      fill: none;
      stroke: var(--primary);
      stroke-width: 3;
    }

    .chart-point {
      fill: var(--card);
      stroke: var(--primary);
      stroke-width: 2;
    }

    .chart-area-fill {
      fill: url(#volumeFill);
      stroke: none;
    }

    .chart-bar {
      fill: var(--chart-2);
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      justify-content: center;
      margin-top: 6px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .legend .swatch {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 3px;
      margin-right: 6px;
    }

    button {
      appearance: none;
      border: 1px solid transparent;
      border-radius: 10px;
      padding: 9px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      background: var(--primary);
      color: white;
      transition: transform 120ms ease, opacity 120ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    button.ghost {
      background: transparent;
      border-color: var(--primary);
      color: var(--primary);
    }

    .actions {
      display: flex;
      gap: 10px;
    }

    .alert {
      display: none;
      border: 1px solid var(--primary);
      background: var(--primary-soft);
      border-radius: 12px;
      padding: 14px 16px;
      margin-bottom: 14px;
      align-items: center;
      justify-content: space-between;
      gap: 14px;
      flex-wrap: wrap;
    }

    .alert.open {
      display: flex;
    }

    .edit-grid {
      display: none;
      grid-template-columns: repeat(auto-fit, minmax(110px, 1fr));
      gap: 14px;
      padding: 8px 0 4px;
    }

    .edit-grid.open {
      display: grid;
    }

    .edit-grid label {
      display: block;
      font-size: 0.85rem;
      font-weight: 600;
      margin-bottom: 6px;
    }

    .edit-grid input {
      width: 100%;
      background: var(--bg);
      border: 1px solid var(--border);
      border-radius: 8px;
      color: var(--ink);
      font-family: inherit;
      font-size: 0.95rem;
      padding: 8px 10px;
    }

    .edit-grid input:focus {
      outline: none;
      border-color: var(--primary);
    }

    .status {
      min-height: 1.3em;
      font-size: 0.95rem;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: var(--destructive);
    }

    .status[data-type="success"] {
      color: var(--chart-3);
    }

    .overlay {
      display: none;
      position: fixed;
      inset: 0;
      z-index: 40;
      background: rgba(4, 6, 12, 0.7);
      place-items: center;
      padding: 20px;
    }

    .overlay.open {
      display: grid;
    }

    .dialog {
      width: min(420px, 100%);
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 14px;
    }

    .dialog h3 {
      margin: 0;
    }

    .dialog p {
      margin: 0;
      color: var(--muted);
      font-size: 0.92rem;
    }

    .dialog input {
      width: 100%;
      background: var(--bg);
      border: 1px solid var(--border);
      border-radius: 8px;
      color: var(--ink);
      font-family: inherit;
      font-size: 0.95rem;
      padding: 10px 12px;
    }

    .dialog input.invalid {
      border-color: var(--destructive);
    }

    .dialog .error {
      color: var(--destructive);
      font-size: 0.85rem;
      min-height: 1.1em;
      margin: 0;
    }
  </style>
</head>
<body>
  <header class="top">
    <div class="top-inner">
      <div class="brand"><span class="mark">&#9641;</span> Voice Analytics</div>
      <button class="ghost" type="button">Export Report</button>
    </div>
  </header>

  <main>
    <section class="hero">
      <h2>Call Analytics <span>Dashboard</span></h2>
      <p>Monitor your voice agents' performance with real-time insights and customizable metrics.</p>
    </section>

    <section class="stat-grid" id="stat-grid"></section>

    <section class="chart-grid">
      <div class="card chart-card">
        <h3>Average Call Duration</h3>
        <p class="subtitle">Call duration trends over 24 hours</p>
        <svg id="duration-chart" class="chart" viewBox="0 0 520 280" role="img" aria-label="Call duration chart"></svg>
      </div>

      <div class="card chart-card">
        <h3>Success Rate by Agent</h3>
        <p class="subtitle">Performance comparison across voice agents</p>
        <svg id="success-chart" class="chart" viewBox="0 0 520 280" role="img" aria-label="Success rate chart"></svg>
      </div>

      <div class="card chart-card">
        <h3>Call Sentiment Analysis</h3>
        <p class="subtitle">Distribution of customer sentiment</p>
        <svg id="sentiment-chart" class="chart" viewBox="0 0 520 280" role="img" aria-label="Sentiment chart"></svg>
        <div class="legend" id="sentiment-legend"></div>
      </div>

      <div class="card chart-card wide">
        <div class="chart-head">
          <div>
            <h3>Weekly Call Volume (Editable)</h3>
            <p class="subtitle">Customize your call volume data &middot; week {{WEEK}}</p>
          </div>
          <div class="actions">
            <button id="edit-btn" class="ghost" type="button">Edit Data</button>
            <button id="save-btn" type="button" hidden>Save</button>
            <button id="cancel-btn" class="ghost" type="button" hidden>Cancel</button>
          </div>
        </div>

        <div class="alert" id="overwrite-alert">
          <span>You have previous data saved. Do you want to overwrite it?</span>
          <div class="actions">
            <button id="overwrite-btn" type="button">Yes, Overwrite</button>
            <button id="overwrite-cancel-btn" class="ghost" type="button">Cancel</button>
          </div>
        </div>

        <svg id="volume-chart" class="chart" viewBox="0 0 1040 280" role="img" aria-label="Call volume chart">
          <defs>
            <linearGradient id="volumeFill" x1="0" y1="0" x2="0" y2="1">
              <stop offset="5%" stop-color="#7c5cff" stop-opacity="0.3" />
              <stop offset="95%" stop-color="#7c5cff" stop-opacity="0" />
            </linearGradient>
          </defs>
        </svg>
        <div class="edit-grid" id="edit-grid"></div>
        <div class="status" id="status"></div>
      </div>
    </section>
  </main>

  <div class="overlay" id="email-overlay">
    <form class="dialog" id="email-form">
      <h3>Enter Your Email</h3>
      <p>To customize and save your analytics data, please provide your email address. We'll use it to remember your preferences.</p>
      <input type="email" id="email-input" placeholder="your.email@example.com" autocomplete="email" />
      <p class="error" id="email-error"></p>
      <button type="submit">Continue</button>
    </form>
  </div>

  <script>
    const statGrid = document.getElementById('stat-grid');
    const durationChart = document.getElementById('duration-chart');
    const successChart = document.getElementById('success-chart');
    const sentimentChart = document.getElementById('sentiment-chart');
    const sentimentLegend = document.getElementById('sentiment-legend');
    const volumeChart = document.getElementById('volume-chart');
    const editGrid = document.getElementById('edit-grid');
    const overwriteAlert = document.getElementById('overwrite-alert');
    const statusEl = document.getElementById('status');
    const editBtn = document.getElementById('edit-btn');
    const saveBtn = document.getElementById('save-btn');
    const cancelBtn = document.getElementById('cancel-btn');
    const overwriteBtn = document.getElementById('overwrite-btn');
    const overwriteCancelBtn = document.getElementById('overwrite-cancel-btn');
    const emailOverlay = document.getElementById('email-overlay');
    const emailForm = document.getElementById('email-form');
    const emailInput = document.getElementById('email-input');
    const emailError = document.getElementById('email-error');

    const SENTIMENT_COLORS = ['#34d399', '#fbbf24', '#f87171'];
    let volumeView = null;
    let statusTimer = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      clearTimeout(statusTimer);
      if (type === 'success') {
        statusTimer = setTimeout(() => setStatus('', ''), 2500);
      }
    };

    const fetchJson = async (url) => {
      const res = await fetch(url);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body || {})
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const svgEl = (tag, attrs) => {
      const el = document.createElementNS('http://www.w3.org/2000/svg', tag);
      for (const [key, value] of Object.entries(attrs)) {
        el.setAttribute(key, value);
      }
      return el;
    };

    const clearChart = (svg) => {
      for (const child of Array.from(svg.children)) {
        if (child.tagName !== 'defs') {
          child.remove();
        }
      }
    };

    // Shared frame: y scale including zero, grid lines, y tick labels.
    const chartFrame = (svg, values, width, height) => {
      const padX = 48;
      const padY = 34;
      const top = 22;
      let min = Math.min(0, ...values);
      let max = Math.max(0, ...values);
      if (min === max) {
        max += 1;
      }
      const range = max - min;
      const y = (value) => height - padY - ((value - min) / range) * (height - top - padY);

      const ticks = 4;
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        svg.appendChild(svgEl('line', {
          class: 'chart-grid-line', x1: padX, y1: yPos, x2: width - padX, y2: yPos
        }));
        const label = svgEl('text', {
          class: 'chart-label', x: padX - 10, y: yPos + 4, 'text-anchor': 'end'
        });
        label.textContent = Math.round(value * 10) / 10;
        svg.appendChild(label);
      }

      return { padX, padY, y };
    };

    const renderLineChart = (svg, points, options) => {
      clearChart(svg);
      const width = svg.viewBox.baseVal.width;
      const height = svg.viewBox.baseVal.height;
      const { padX, padY, y } = chartFrame(svg, points.map((p) => p.value), width, height);
      const xStep = points.length > 1 ? (width - padX * 2) / (points.length - 1) : 0;
      const x = (index) => padX + index * xStep;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      if (options && options.area) {
        const base = y(Math.min(0, ...points.map((p) => p.value)));
        svg.appendChild(svgEl('path', {
          class: 'chart-area-fill',
          d: `${path} L ${x(points.length - 1).toFixed(2)} ${base.toFixed(2)} L ${x(0).toFixed(2)} ${base.toFixed(2)} Z`
        }));
      }

      svg.appendChild(svgEl('path', { class: 'chart-line', d: path }));
      points.forEach((point, index) => {
        svg.appendChild(svgEl('circle', {
          class: 'chart-point', cx: x(index), cy: y(point.value), r: 4
        }));
        const label = svgEl('text', {
          class: 'chart-label', x: x(index), y: height - padY + 18, 'text-anchor': 'middle'
        });
        label.textContent = point.label;
        svg.appendChild(label);
      });
    };

    const renderBarChart = (svg, points) => {
      clearChart(svg);
      const width = svg.viewBox.baseVal.width;
      const height = svg.viewBox.baseVal.height;
      const { padX, padY, y } = chartFrame(svg, points.map((p) => p.value), width, height);
      const slot = (width - padX * 2) / points.length;
      const barWidth = slot * 0.55;

      points.forEach((point, index) => {
        const xPos = padX + slot * index + (slot - barWidth) / 2;
        const yPos = y(point.value);
        svg.appendChild(svgEl('rect', {
          class: 'chart-bar', x: xPos, y: yPos, rx: 6,
          width: barWidth, height: Math.max(0, y(0) - yPos)
        }));
        const label = svgEl('text', {
          class: 'chart-label', x: xPos + barWidth / 2, y: height - padY + 18, 'text-anchor': 'middle'
        });
        label.textContent = point.label;
        svg.appendChild(label);
      });
    };

    const renderDonut = (svg, slices) => {
      clearChart(svg);
      const width = svg.viewBox.baseVal.width;
      const height = svg.viewBox.baseVal.height;
      const radius = 82;
      const circumference = 2 * Math.PI * radius;
      const total = slices.reduce((sum, slice) => sum + slice.share, 0) || 1;
      let offset = 0;

      slices.forEach((slice, index) => {
        const length = (slice.share / total) * circumference;
        const circle = svgEl('circle', {
          cx: width / 2, cy: height / 2, r: radius,
          fill: 'none',
          stroke: SENTIMENT_COLORS[index % SENTIMENT_COLORS.length],
          'stroke-width': 34,
          'stroke-dasharray': `${length} ${circumference - length}`,
          'stroke-dashoffset': -offset,
          transform: `rotate(-90 ${width / 2} ${height / 2})`
        });
        svg.appendChild(circle);
        offset += length;
      });

      sentimentLegend.innerHTML = slices
        .map((slice, index) =>
          `<span><span class="swatch" style="background:${SENTIMENT_COLORS[index % SENTIMENT_COLORS.length]}"></span>${slice.name} ${slice.share}%</span>`)
        .join('');
    };

    const renderStats = (stats) => {
      statGrid.innerHTML = stats
        .map((stat) => `
          <div class="card stat">
            <p class="label">${stat.label}</p>
            <p class="value">${stat.value}</p>
            <p class="change">${stat.change}</p>
          </div>`)
        .join('');
    };

    const renderEditGrid = (points) => {
      editGrid.innerHTML = points
        .map((point, index) => `
          <div>
            <label for="field-${index}">${point.label}</label>
            <input id="field-${index}" type="number" data-index="${index}" value="${point.value}" />
          </div>`)
        .join('');
    };

    const renderVolume = () => {
      if (!volumeView) {
        return;
      }
      const editing = volumeView.phase === 'editing';
      const confirming = volumeView.phase === 'confirm_overwrite';

      overwriteAlert.classList.toggle('open', confirming);
      editGrid.classList.toggle('open', editing);
      volumeChart.style.display = editing ? 'none' : 'block';
      editBtn.hidden = editing || confirming;
      saveBtn.hidden = !editing;
      cancelBtn.hidden = !editing;

      if (editing) {
        renderEditGrid(volumeView.points);
      } else {
        renderLineChart(
          volumeChart,
          volumeView.points.map((p) => ({ label: p.label, value: p.value })),
          { area: true }
        );
      }
    };

    const applyView = (view) => {
      volumeView = view;
      renderVolume();
      if (view.notification) {
        setStatus(view.notification.message, view.notification.kind);
      }
    };

    const openDialog = () => {
      emailError.textContent = '';
      emailInput.classList.remove('invalid');
      emailOverlay.classList.add('open');
      emailInput.focus();
    };

    const closeDialog = () => {
      emailOverlay.classList.remove('open');
      emailInput.value = '';
    };

    editBtn.addEventListener('click', () => {
      post('/api/volume/edit')
        .then((view) => {
          applyView(view);
          if (!view.has_identity) {
            openDialog();
          }
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    saveBtn.addEventListener('click', () => {
      setStatus('Saving...', '');
      post('/api/volume/save')
        .then(applyView)
        .catch((err) => setStatus(err.message, 'error'));
    });

    cancelBtn.addEventListener('click', () => {
      post('/api/volume/cancel')
        .then(applyView)
        .catch((err) => setStatus(err.message, 'error'));
    });

    overwriteBtn.addEventListener('click', () => {
      post('/api/volume/confirm')
        .then(applyView)
        .catch((err) => setStatus(err.message, 'error'));
    });

    overwriteCancelBtn.addEventListener('click', () => {
      post('/api/volume/cancel')
        .then(applyView)
        .catch((err) => setStatus(err.message, 'error'));
    });

    editGrid.addEventListener('input', (event) => {
      const index = Number(event.target.dataset.index);
      if (Number.isNaN(index)) {
        return;
      }
      const raw = event.target.value;
      if (volumeView && volumeView.points[index]) {
        volumeView.points[index].value = parseInt(raw, 10) || 0;
      }
      post('/api/volume/field', { index, value: raw })
        .catch((err) => setStatus(err.message, 'error'));
    });

    emailForm.addEventListener('submit', (event) => {
      event.preventDefault();
      post('/api/identity', { email: emailInput.value })
        .then((view) => {
          if (!view.has_identity) {
            emailError.textContent = view.notification ? view.notification.message : 'Please enter a valid email address';
            emailInput.classList.add('invalid');
            return;
          }
          closeDialog();
          applyView(view);
        })
        .catch((err) => {
          emailError.textContent = err.message;
          emailInput.classList.add('invalid');
        });
    });

    emailInput.addEventListener('input', () => {
      emailError.textContent = '';
      emailInput.classList.remove('invalid');
    });

    const refresh = async () => {
      const [metrics, volume] = await Promise.all([
        fetchJson('/api/metrics'),
        fetchJson('/api/volume')
      ]);
      renderStats(metrics.stats);
      renderLineChart(
        durationChart,
        metrics.duration.map((p) => ({ label: p.time, value: p.minutes }))
      );
      renderBarChart(
        successChart,
        metrics.success.map((p) => ({ label: p.agent, value: p.rate }))
      );
      renderDonut(sentimentChart, metrics.sentiment);
      applyView(volume);
    };

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
