/*!
# Introductory Tutorial

Start the `basic` executable from a terminal. The interpreter greets
you with a prompt and waits. CTRL-D leaves, CTRL-C stops whatever is
running.
<pre><code>&nbsp;  READY.
&nbsp;> █
</code></pre>

Lines you type are marked here with "`>`". A line without a number
runs as soon as you press ENTER. This is direct mode.

<pre><code>&nbsp;> print 6*7; "is the answer"
&nbsp;  42 is the answer
&nbsp;  READY.
</code></pre>

Put a number from 0 to 65529 in front of the same line and it is
stored instead. Stored lines make up the program, kept in order of
their numbers no matter the order you typed them in. Keywords may be
upper or lower case. `LIST` shows the lines as typed and `RUN`
starts the program at the lowest number.

<pre><code>&nbsp;> 20 print "world"
&nbsp;> 10 print "hello";
&nbsp;> LIST
&nbsp;  10 print "hello";
&nbsp;  20 print "world"
&nbsp;> RUN
&nbsp;  helloworld
&nbsp;  READY.
</code></pre>

Typing a number that is already stored replaces that line. A number
by itself removes the line, and a number followed by TAB brings the
stored text back for editing. A colon puts several statements on one
line.

<pre><code>&nbsp;> 20<i>{TAB}</i>
&nbsp;> 20 print "world":print "bye"
</code></pre>

Errors start with a question mark and name the line they happened in.
The arrow keys walk through earlier entries.

<pre><code>&nbsp;> 30 gosub 500
&nbsp;> run
&nbsp;  helloworld
&nbsp;  bye
&nbsp;  <b>?UNDEFINED LINE IN 30; GOSUB 500</b>
&nbsp;  READY.
</code></pre>

A loop that never ends is stopped with CTRL-C.

<pre><code>&nbsp;> 10 input "Radius"; r
&nbsp;> 20 print "Area" 3.14159*r*r
&nbsp;> 30 goto 10
&nbsp;> run
&nbsp;  Radius? 2
&nbsp;  Area 12.56636
&nbsp;  Radius?<i>{CTRL-C}</i>
&nbsp;  <b>?BREAK IN 10</b>
&nbsp;  READY.
</code></pre>

Programs can live in text files of numbered lines. Run one with
`basic area.bas`, adding `--trace` to start with `TRON` on.

*/
