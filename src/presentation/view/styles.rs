// Dashboard stylesheet. Color tokens come from the host document.
pub const DASHBOARD_CSS: &str = r#"
/* General Card Styling */
.dashboard-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 2rem;
    padding-top: 1rem;
}
.dashboard-header {
    text-align: center;
    margin-bottom: 2rem;
}
.dashboard-header h1 {
    font-size: 2.5rem;
    font-weight: 600;
    color: var(--text-color);
    margin: 0;
}
.dashboard-header p {
    font-size: 1.1rem;
    color: var(--text-muted);
    margin-top: 0.5rem;
}
.dashboard-card {
    background: var(--card-bg);
    border-radius: 16px;
    padding: 1.5rem;
    border: 1px solid var(--border-color);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
    display: flex;
    flex-direction: column;
}
.dashboard-card:hover {
    transform: translateY(-5px);
    box-shadow: 0 10px 20px rgba(0,0,0,0.2);
}
.card-header {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1.5rem;
    color: var(--secondary-accent);
}
.card-header h3 {
    margin: 0;
    font-size: 1.25rem;
    color: var(--text-color);
    font-weight: 600;
}
.card-icon {
    background: var(--tertiary-accent);
    padding: 0.5rem;
    border-radius: 8px;
    display: flex;
    align-items: center;
    justify-content: center;
}
.card-content {
    flex-grow: 1;
    display: flex;
    flex-direction: column;
    justify-content: center;
}

/* Idea Funnel */
.idea-funnel {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
}
.funnel-stage {
    width: var(--stage-width);
    background: var(--stage-color);
    color: #fff;
    padding: 0.75rem 1rem;
    border-radius: 4px;
    display: flex;
    justify-content: space-between;
    font-weight: 600;
    transition: transform 0.2s ease;
}
.funnel-stage:hover {
    transform: scale(1.05);
}

/* Donut Chart */
.donut-chart-container {
    display: flex;
    align-items: center;
    gap: 2rem;
}
.donut-chart {
    transform: rotate(-90deg);
    animation: fill-donut 2s ease-out forwards;
}
.donut-hole { fill: var(--card-bg); }
.donut-ring { stroke: var(--tertiary-accent); stroke-width: 20; }
.donut-segment { stroke-width: 20; fill: transparent; stroke-linecap: round; }
.donut-center-text { font-size: 2rem; font-weight: bold; fill: var(--text-color); transform: rotate(90deg) translate(0, -200px); }

@keyframes fill-donut {
    from { stroke-dasharray: 0 1000; }
}

.donut-legend { display: flex; flex-direction: column; gap: 0.5rem; }
.legend-item { display: flex; align-items: center; gap: 0.5rem; font-size: 0.9rem; }
.legend-color { width: 12px; height: 12px; border-radius: 50%; }

/* Market Adoption Chart */
.line-chart-container { position: relative; }
.line-chart { width: 100%; height: 150px; }
.line-chart polyline {
    stroke-dasharray: 1000;
    stroke-dashoffset: 1000;
    animation: draw-line 2s ease-out forwards;
}
@keyframes draw-line {
    to { stroke-dashoffset: 0; }
}
.chart-labels { display: flex; justify-content: space-between; font-size: 0.8rem; color: var(--text-muted); padding: 0 0.5rem; margin-top: 0.25rem; }

/* Team Collaboration */
.progress-bar-container { display: flex; flex-direction: column; gap: 1.5rem; }
.progress-item { width: 100%; }
.progress-label { display: flex; justify-content: space-between; margin-bottom: 0.5rem; font-size: 0.9rem; font-weight: 600; }
.progress-bar-bg { background: var(--tertiary-accent); border-radius: 8px; height: 10px; overflow: hidden; }
.progress-bar-fg { height: 100%; border-radius: 8px; animation: fill-bar 2s ease-out forwards; transform-origin: left; }

@keyframes fill-bar {
    from { transform: scaleX(0); }
    to { transform: scaleX(1); }
}

@media (max-width: 768px) {
    body { padding: 1rem; }
    .dashboard-header h1 { font-size: 2rem; }
    .donut-chart-container { flex-direction: column; }
}
"#;
