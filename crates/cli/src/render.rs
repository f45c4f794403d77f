use notegraph_graph::GraphFragments;

/// Visualization page with three splice points for the serialized fragment
/// lists. The chart configuration is static text; layout happens client-side
/// in ECharts.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Note Graph</title>
    <script src="https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js"></script>
    <style>
        html, body { margin: 0; height: 100%; background: #111827; }
        #main { width: 100%; height: 100%; }
    </style>
</head>
<body>
    <div id="main"></div>
    <script type="text/javascript">
        var myChart = echarts.init(document.getElementById('main'));

        var graph = {
            nodes: [__NODES__],
            links: [__LINKS__],
            categories: [__CATEGORIES__]
        };

        graph.nodes.forEach(function (node) {
            node.symbolSize = 8;
        });

        var option = {
            color: ['#b4637a', '#f6c177', '#ea9a97', '#3e8fb0', '#9ccfd8', '#c4a7e7'],
            tooltip: {
                backgroundColor: '#1f2937',
                borderColor: '#374151',
                textStyle: {
                    color: '#ffffff',
                    fontSize: 14
                },
                formatter: function (params) {
                    return params.data.value ? params.data.value.replace(/\n/g, '<br>') : '';
                }
            },
            legend: [{
                data: graph.categories.map(function (c) { return c.name; }),
                textStyle: {
                    color: '#ffffff',
                    fontSize: 14
                }
            }],
            series: [{
                type: 'graph',
                layout: 'force',
                data: graph.nodes,
                links: graph.links,
                categories: graph.categories,
                roam: true,
                label: {
                    show: true,
                    position: 'right',
                    color: '#ffffff',
                    fontSize: 12,
                    formatter: function (params) {
                        return params.data.name;
                    }
                },
                emphasis: {
                    focus: 'adjacency',
                    blurScope: 'coordinateSystem'
                },
                force: {
                    repulsion: 300,
                    gravity: 0.1,
                    edgeLength: 100,
                    layoutAnimation: true
                },
                zoom: 1.5,
                center: ['50%', '50%']
            }]
        };

        myChart.setOption(option);

        window.addEventListener('resize', function () {
            myChart.resize();
        });
    </script>
</body>
</html>
"#;

/// Splice the serialized fragments into the page template.
///
/// The fragments arrive already escaped, so this is plain string substitution
/// with no quoting logic of its own.
pub fn render_page(fragments: &GraphFragments) -> String {
    PAGE_TEMPLATE
        .replacen("__NODES__", &fragments.nodes.join(", "), 1)
        .replacen("__LINKS__", &fragments.links.join(", "), 1)
        .replacen("__CATEGORIES__", &fragments.categories.join(", "), 1)
}
