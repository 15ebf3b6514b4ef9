//! Built-in example set shipped with the playground.

use std::collections::BTreeMap;

use compact_str::CompactString;
use serde_json::Value;

use super::catalog::Catalog;
use super::descriptor::{ExampleCode, ExampleConfig, ExampleDescriptor, FileEntry};

pub const DEFAULT_EXAMPLE: &str = "3d-card";

fn tailwind() -> ExampleConfig {
    ExampleConfig {
        enable_tailwind: true,
        ..ExampleConfig::default()
    }
}

fn with_echarts() -> ExampleConfig {
    let mut dependencies = BTreeMap::new();
    dependencies.insert(CompactString::new("echarts"), Value::String("echarts".to_string()));
    ExampleConfig {
        dependencies,
        enable_tailwind: true,
        extra: BTreeMap::new(),
    }
}

/// The catalog the playground starts from, defaulting to the 3D card demo.
pub fn catalog() -> Catalog {
    Catalog::new(examples())
        .and_then(|c| c.with_default(DEFAULT_EXAMPLE))
        .expect("builtin examples are valid")
}

fn examples() -> Vec<ExampleDescriptor> {
    vec![
        ExampleDescriptor {
            id: CompactString::new("welcome"),
            title: "Animated Hero Section".to_string(),
            description: "An animated hero with a pointer-tracking gradient".to_string(),
            category: CompactString::new("Getting Started"),
            code: ExampleCode::Single(
                r#"export default function AnimatedHero() {
  const [pos, setPos] = React.useState({ x: 50, y: 50 });

  const handleMouseMove = (e) => {
    const rect = e.currentTarget.getBoundingClientRect();
    setPos({
      x: ((e.clientX - rect.left) / rect.width) * 100,
      y: ((e.clientY - rect.top) / rect.height) * 100
    });
  };

  return (
    <div
      className="min-h-screen flex items-center justify-center bg-slate-900"
      onMouseMove={handleMouseMove}
      style={{
        background: `radial-gradient(circle at ${pos.x}% ${pos.y}%, rgba(168, 85, 247, 0.4), #0f172a 60%)`
      }}
    >
      <h1 className="text-6xl font-black text-white">Build. Execute. Experience.</h1>
    </div>
  );
}"#
                .to_string(),
            ),
            config: tailwind(),
        },
        ExampleDescriptor {
            id: CompactString::new("3d-card"),
            title: "3D Product Card".to_string(),
            description: "A card with tilt-on-hover and a like counter".to_string(),
            category: CompactString::new("UI Components"),
            code: ExampleCode::Single(
                r#"export default function ProductCard3D() {
  const [rotation, setRotation] = React.useState({ x: 0, y: 0 });
  const [likes, setLikes] = React.useState(1284);

  const handleMouseMove = (e) => {
    const rect = e.currentTarget.getBoundingClientRect();
    setRotation({
      x: -(e.clientY - rect.top - rect.height / 2) / 10,
      y: (e.clientX - rect.left - rect.width / 2) / 10
    });
  };

  return (
    <div className="min-h-screen flex items-center justify-center bg-slate-900" style={{ perspective: '1000px' }}>
      <div
        className="w-96 p-8 rounded-3xl bg-gradient-to-br from-purple-600 to-blue-600 shadow-2xl"
        onMouseMove={handleMouseMove}
        onMouseLeave={() => setRotation({ x: 0, y: 0 })}
        style={{ transform: `rotateX(${rotation.x}deg) rotateY(${rotation.y}deg)` }}
      >
        <h3 className="text-3xl font-black text-white mb-2">Premium Design</h3>
        <p className="text-purple-200 text-sm mb-6">3D interactive experience</p>
        <button
          className="px-6 py-3 bg-white text-purple-600 rounded-xl font-bold"
          onClick={() => setLikes(likes + 1)}
        >
          {likes.toLocaleString()} likes
        </button>
      </div>
    </div>
  );
}"#
                .to_string(),
            ),
            config: tailwind(),
        },
        ExampleDescriptor {
            id: CompactString::new("todo-app"),
            title: "Todo App with Hooks".to_string(),
            description: "A complete todo application showcasing hooks and state".to_string(),
            category: CompactString::new("Applications"),
            code: ExampleCode::Single(
                r#"export default function TodoApp() {
  const [todos, setTodos] = React.useState([
    { id: 1, text: 'Build amazing components', completed: false }
  ]);
  const [input, setInput] = React.useState('');

  const addTodo = () => {
    if (!input.trim()) return;
    setTodos([...todos, { id: Date.now(), text: input, completed: false }]);
    setInput('');
  };

  const toggle = (id) => {
    setTodos(todos.map(t => t.id === id ? { ...t, completed: !t.completed } : t));
  };

  return (
    <div className="max-w-md mx-auto bg-white rounded-xl shadow-lg p-6">
      <div className="flex gap-2 mb-4">
        <input
          className="flex-1 px-4 py-2 border rounded-lg"
          value={input}
          onChange={(e) => setInput(e.target.value)}
          placeholder="Add a new todo..."
        />
        <button className="bg-blue-600 text-white px-4 py-2 rounded-lg" onClick={addTodo}>
          Add
        </button>
      </div>
      {todos.map(todo => (
        <label key={todo.id} className="flex items-center gap-3 p-2">
          <input type="checkbox" checked={todo.completed} onChange={() => toggle(todo.id)} />
          <span className={todo.completed ? 'line-through text-gray-500' : ''}>{todo.text}</span>
        </label>
      ))}
    </div>
  );
}"#
                .to_string(),
            ),
            config: tailwind(),
        },
        ExampleDescriptor {
            id: CompactString::new("data-visualization"),
            title: "Data Visualization".to_string(),
            description: "An interactive chart backed by a host-provided ECharts binding".to_string(),
            category: CompactString::new("Advanced"),
            code: ExampleCode::Single(
                r#"import * as echarts from 'echarts';
import { useEffect, useRef } from 'react';

export default function DataVisualization() {
  const chartRef = useRef(null);
  const [data, setData] = React.useState([120, 200, 150, 80, 70, 110, 130]);

  useEffect(() => {
    const chart = echarts.init(chartRef.current);
    chart.setOption({
      xAxis: { type: 'category', data: ['Jan', 'Feb', 'Mar', 'Apr', 'May', 'Jun', 'Jul'] },
      yAxis: { type: 'value' },
      series: [{ type: 'line', data, smooth: true }]
    });
    return () => chart.dispose();
  }, [data]);

  return (
    <div className="max-w-4xl mx-auto p-6 bg-white rounded-xl shadow-lg">
      <button
        className="mb-4 bg-blue-600 text-white px-4 py-2 rounded-lg"
        onClick={() => setData(data.map(() => Math.floor(Math.random() * 200) + 50))}
      >
        Randomize Data
      </button>
      <div ref={chartRef} style={{ height: '400px' }} />
    </div>
  );
}"#
                .to_string(),
            ),
            config: with_echarts(),
        },
        ExampleDescriptor {
            id: CompactString::new("multi-file-dashboard"),
            title: "Multi-File Dashboard".to_string(),
            description: "A dashboard split across multiple component files".to_string(),
            category: CompactString::new("Advanced"),
            code: ExampleCode::Files(vec![
                FileEntry::entry(
                    "App.tsx",
                    r#"import React from 'react';
import Header from '../components/Header';
import StatsGrid from '../components/StatsGrid';

export default function Dashboard() {
  return (
    <div className="min-h-screen bg-gray-50">
      <Header />
      <main className="max-w-7xl mx-auto px-4 py-8">
        <StatsGrid />
      </main>
    </div>
  );
}"#,
                ),
                FileEntry::new(
                    "components/Header.tsx",
                    r#"import React from 'react';

export default function Header() {
  return (
    <header className="bg-white shadow-sm border-b border-gray-200">
      <div className="max-w-7xl mx-auto px-4 h-16 flex items-center">
        <h1 className="text-xl font-semibold text-gray-900">Dashboard</h1>
      </div>
    </header>
  );
}"#,
                ),
                FileEntry::new(
                    "components/StatsGrid.tsx",
                    r#"import React from 'react';

const stats = [
  { name: 'Total Users', value: '2,847' },
  { name: 'Revenue', value: '$54,239' },
  { name: 'Orders', value: '1,429' },
];

export default function StatsGrid() {
  return (
    <div className="grid grid-cols-1 md:grid-cols-3 gap-6">
      {stats.map((stat) => (
        <div key={stat.name} className="bg-white p-6 rounded-lg shadow-sm">
          <p className="text-sm font-medium text-gray-600">{stat.name}</p>
          <p className="text-2xl font-bold text-gray-900">{stat.value}</p>
        </div>
      ))}
    </div>
  );
}"#,
                ),
            ]),
            config: with_echarts(),
        },
    ]
}
