//! The dashboard page.
//!
//! A single static document: controls are filled from `/v1/controls` and every
//! control change is posted to `/v1/dashboard/events`; returned figures are
//! drawn with plotly.js.

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>__TITLE__</title>
<script src="https://cdn.plot.ly/plotly-2.35.0.min.js"></script>
<style>
body{font-family:system-ui,-apple-system,sans-serif;max-width:1400px;margin:0 auto;padding:20px;background:#fafafa}
h1{text-align:center;color:#503D36;font-size:40px}
select{width:100%;padding:6px;font-size:16px}
.range{display:flex;gap:12px;align-items:center}
.range input{flex:1}
.plot{background:#fff;border-radius:8px;padding:10px;margin:20px 0;box-shadow:0 1px 3px rgba(0,0,0,0.1)}
</style></head><body>
<h1>__TITLE__</h1>

<select id="site-dropdown"></select>
<br>

<div class="plot"><div id="success-pie-chart" style="height:450px"></div></div>
<br>

<p>Payload range (Kg): <span id="payload-label"></span></p>
<div class="range">
<input type="range" id="payload-low" step="any">
<input type="range" id="payload-high" step="any">
</div>
<datalist id="payload-marks"></datalist>

<div class="plot"><div id="success-payload-scatter-chart" style="height:450px"></div></div>

<script>
let state = null;

function draw(id, chart) {
  if (chart) Plotly.react(id, chart.figure.data, chart.figure.layout);
}

async function send(event) {
  const res = await fetch('/v1/dashboard/events', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({state, event}),
  });
  if (!res.ok) { console.error(await res.text()); return; }
  const update = await res.json();
  state = update.state;
  draw('success-pie-chart', update.pie);
  draw('success-payload-scatter-chart', update.scatter);
}

async function init() {
  const controls = await (await fetch('/v1/controls')).json();
  const dropdown = controls.site_dropdown;
  const slider = controls.payload_slider;

  const select = document.getElementById('site-dropdown');
  select.title = dropdown.placeholder;
  for (const opt of dropdown.options) {
    const el = document.createElement('option');
    el.value = opt.value;
    el.textContent = opt.label;
    select.appendChild(el);
  }
  select.value = dropdown.default_value;

  const marks = document.getElementById('payload-marks');
  for (const mark of slider.marks) {
    const el = document.createElement('option');
    el.value = mark.value;
    el.label = mark.label;
    marks.appendChild(el);
  }

  const low = document.getElementById('payload-low');
  const high = document.getElementById('payload-high');
  for (const el of [low, high]) {
    el.min = slider.min;
    el.max = slider.max;
    el.setAttribute('list', 'payload-marks');
  }
  low.value = slider.default_value.low;
  high.value = slider.default_value.high;

  const snap = (v) => {
    if (v <= slider.min) return slider.min;
    if (v >= slider.max) return slider.max;
    return Math.min(slider.max, slider.min + Math.round((v - slider.min) / slider.step) * slider.step);
  };
  const label = document.getElementById('payload-label');
  const showRange = (r) => { label.textContent = r.low + ' - ' + r.high; };

  state = {site: dropdown.default_value, payload_range: slider.default_value};
  showRange(state.payload_range);

  select.addEventListener('change', () => send({control: 'site', value: select.value}));
  const onRange = () => {
    let a = snap(Number(low.value));
    let b = snap(Number(high.value));
    if (a > b) [a, b] = [b, a];
    const range = {low: a, high: b};
    showRange(range);
    send({control: 'payload_range', value: range});
  };
  low.addEventListener('change', onRange);
  high.addEventListener('change', onRange);

  await send({control: 'site', value: state.site});
}

init();
</script>
</body></html>
"#;

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Render the page with `title` as both the document title and the header.
pub fn render_index(title: &str) -> String {
    INDEX_TEMPLATE.replace("__TITLE__", &escape_html(title))
}
